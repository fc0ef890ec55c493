mod create_incentive;
