use cosmwasm_std::testing::MockApi;
use cosmwasm_std::{Addr, Binary, Uint128, Uint256};

use lp_incentives_std::staker::IncentiveParams;

use crate::helpers::ValidatedKey;
use crate::tests::suite::{params_to_key, TestingSuite};
use crate::ContractError;

fn default_params(reward_token: &Addr, pool: &Addr, total_reward: u128) -> IncentiveParams {
    IncentiveParams {
        reward_token: reward_token.to_string(),
        pool: pool.to_string(),
        start_time: 0,
        end_time: 10,
        claim_deadline: 20,
        total_reward: Uint128::new(total_reward),
    }
}

#[test]
fn create_incentive_without_allowance_fails_then_succeeds() {
    let mut suite = TestingSuite::default();
    suite.instantiate().create_cw20_token("REWARD").create_cw20_token("uLP");

    let creator = suite.creator();
    let reward_token = suite.cw20_tokens[0].clone();
    let pool = suite.cw20_tokens[1].clone();
    let staker_addr = suite.staker_addr.clone();

    let creator_balance = suite.query_cw20_balance(&reward_token, &creator);

    suite.create_incentive(
        creator.clone(),
        default_params(&reward_token, &pool, 500u128),
        |result| {
            let err = result.unwrap_err().downcast::<ContractError>().unwrap();

            match err {
                ContractError::AllowanceInsufficient {
                    allowance,
                    required,
                } => {
                    assert_eq!(allowance, Uint128::zero());
                    assert_eq!(required, Uint128::new(500u128));
                }
                _ => panic!("Wrong error type, should return ContractError::AllowanceInsufficient"),
            }
        },
    );

    // the failed call must not have mutated anything
    assert!(suite.query_incentives().is_empty());
    assert_eq!(
        suite.query_cw20_balance(&reward_token, &creator),
        creator_balance
    );
    assert_eq!(
        suite.query_cw20_balance(&reward_token, &staker_addr),
        Uint128::zero()
    );

    // approving exactly the total reward makes the identical call succeed
    suite.increase_allowance(creator.clone(), reward_token.clone(), Uint128::new(500u128));
    suite.create_incentive(
        creator.clone(),
        default_params(&reward_token, &pool, 500u128),
        |result| {
            let response = result.unwrap();

            // the incentive creation attributes and the cw20 transfer are
            // both part of the transaction
            assert!(response.events.iter().any(|event| {
                event
                    .attributes
                    .iter()
                    .any(|attribute| attribute.key == "action"
                        && attribute.value == "create_incentive")
            }));
            assert!(response.events.iter().any(|event| {
                event
                    .attributes
                    .iter()
                    .any(|attribute| attribute.key == "action"
                        && attribute.value == "transfer_from")
            }));
        },
    );

    assert_eq!(
        suite.query_cw20_balance(&reward_token, &creator),
        creator_balance - Uint128::new(500u128)
    );
    assert_eq!(
        suite.query_cw20_balance(&reward_token, &staker_addr),
        Uint128::new(500u128)
    );

    let incentive = suite
        .query_incentive(params_to_key(
            &default_params(&reward_token, &pool, 500u128),
            &creator,
        ))
        .unwrap();
    assert_eq!(incentive.total_reward, Uint128::new(500u128));
    assert_eq!(incentive.total_reward_unclaimed, Uint128::new(500u128));
    assert_eq!(incentive.total_seconds_claimed_x128, Uint256::zero());
    assert_eq!(incentive.number_of_stakes, 0u64);
}

#[test]
fn create_duplicate_incentive_fails() {
    let mut suite = TestingSuite::default();
    suite.instantiate().create_cw20_token("REWARD").create_cw20_token("uLP");

    let creator = suite.creator();
    let reward_token = suite.cw20_tokens[0].clone();
    let pool = suite.cw20_tokens[1].clone();

    suite.increase_allowance(creator.clone(), reward_token.clone(), Uint128::new(1_000u128));
    suite.create_incentive(
        creator.clone(),
        default_params(&reward_token, &pool, 500u128),
        |result| {
            result.unwrap();
        },
    );

    // the remaining allowance covers the second call, the duplicate key is
    // what makes it fail
    suite.create_incentive(
        creator.clone(),
        default_params(&reward_token, &pool, 1u128),
        |result| {
            let err = result.unwrap_err().downcast::<ContractError>().unwrap();

            match err {
                ContractError::IncentiveAlreadyExists {} => {}
                _ => {
                    panic!("Wrong error type, should return ContractError::IncentiveAlreadyExists")
                }
            }
        },
    );

    assert_eq!(suite.query_incentives().len(), 1);
}

#[test]
fn create_incentive_with_invalid_timestamps_fails() {
    let mut suite = TestingSuite::default();
    suite.instantiate().create_cw20_token("REWARD").create_cw20_token("uLP");

    let creator = suite.creator();
    let reward_token = suite.cw20_tokens[0].clone();
    let pool = suite.cw20_tokens[1].clone();

    suite.increase_allowance(creator.clone(), reward_token.clone(), Uint128::new(1_000u128));

    // start after end, deadline before end, start after end again
    for (start_time, end_time, claim_deadline) in [(2, 1, 5), (1, 2, 0), (10, 4, 5)] {
        let params = IncentiveParams {
            start_time,
            end_time,
            claim_deadline,
            ..default_params(&reward_token, &pool, 100u128)
        };

        suite.create_incentive(creator.clone(), params, |result| {
            let err = result.unwrap_err().downcast::<ContractError>().unwrap();

            match err {
                ContractError::InvalidTimestamps { .. } => {}
                _ => panic!("Wrong error type, should return ContractError::InvalidTimestamps"),
            }
        });
    }

    assert!(suite.query_incentives().is_empty());

    // the claim deadline is allowed to coincide with the end time
    let params = IncentiveParams {
        start_time: 1,
        end_time: 2,
        claim_deadline: 2,
        ..default_params(&reward_token, &pool, 100u128)
    };
    suite.create_incentive(creator, params, |result| {
        result.unwrap();
    });
}

#[test]
fn create_incentive_with_zero_reward_fails() {
    let mut suite = TestingSuite::default();
    suite.instantiate().create_cw20_token("REWARD").create_cw20_token("uLP");

    let creator = suite.creator();
    let reward_token = suite.cw20_tokens[0].clone();
    let pool = suite.cw20_tokens[1].clone();

    suite.create_incentive(
        creator,
        default_params(&reward_token, &pool, 0u128),
        |result| {
            let err = result.unwrap_err().downcast::<ContractError>().unwrap();

            match err {
                ContractError::InvalidReward {} => {}
                _ => panic!("Wrong error type, should return ContractError::InvalidReward"),
            }
        },
    );

    assert!(suite.query_incentives().is_empty());
}

#[test]
fn incentives_with_different_reward_tokens_are_independent() {
    let mut suite = TestingSuite::default();
    suite
        .instantiate()
        .create_cw20_token("REWARDA")
        .create_cw20_token("REWARDB")
        .create_cw20_token("uLP");

    let creator = suite.creator();
    let reward_token_a = suite.cw20_tokens[0].clone();
    let reward_token_b = suite.cw20_tokens[1].clone();
    let pool = suite.cw20_tokens[2].clone();

    suite.increase_allowance(creator.clone(), reward_token_a.clone(), Uint128::new(500u128));
    suite.create_incentive(
        creator.clone(),
        default_params(&reward_token_a, &pool, 500u128),
        |result| {
            result.unwrap();
        },
    );

    suite.increase_allowance(creator.clone(), reward_token_b.clone(), Uint128::new(750u128));
    suite.create_incentive(
        creator.clone(),
        default_params(&reward_token_b, &pool, 750u128),
        |result| {
            result.unwrap();
        },
    );

    assert_eq!(suite.query_incentives().len(), 2);

    // repeating either key still fails
    suite.create_incentive(
        creator,
        default_params(&reward_token_b, &pool, 750u128),
        |result| {
            let err = result.unwrap_err().downcast::<ContractError>().unwrap();

            match err {
                ContractError::IncentiveAlreadyExists {} => {}
                _ => {
                    panic!("Wrong error type, should return ContractError::IncentiveAlreadyExists")
                }
            }
        },
    );
}

#[test]
fn incentives_are_paginated_over_the_raw_key() {
    let mut suite = TestingSuite::default();
    suite.instantiate().create_cw20_token("REWARD").create_cw20_token("uLP");

    let creator = suite.creator();
    let reward_token = suite.cw20_tokens[0].clone();
    let pool = suite.cw20_tokens[1].clone();

    suite.increase_allowance(creator.clone(), reward_token.clone(), Uint128::new(3_500u128));

    // identical keys except for the start time, which is the first varying
    // component of the raw storage key, so the listing orders by it
    for start_time in 0..35u64 {
        let params = IncentiveParams {
            start_time,
            end_time: 100,
            claim_deadline: 200,
            ..default_params(&reward_token, &pool, 100u128)
        };

        suite.create_incentive(creator.clone(), params, |result| {
            result.unwrap();
        });
    }

    // ten per page by default, larger requests are clamped to thirty
    assert_eq!(suite.query_incentives_paged(None, None).len(), 10);

    let first_page = suite.query_incentives_paged(None, Some(50));
    assert_eq!(first_page.len(), 30);

    let api = MockApi::default();
    let start_after = ValidatedKey::from_key(&api, &first_page.last().unwrap().key())
        .unwrap()
        .to_bytes(&api)
        .unwrap();
    let second_page = suite.query_incentives_paged(Some(Binary::from(start_after)), Some(50));
    assert_eq!(second_page.len(), 5);

    let start_times = first_page
        .iter()
        .chain(second_page.iter())
        .map(|incentive| incentive.start_time)
        .collect::<Vec<_>>();
    assert_eq!(start_times, (0..35u64).collect::<Vec<_>>());
}

#[test]
fn incentives_with_different_creators_are_independent() {
    let mut suite = TestingSuite::default();
    suite.instantiate().create_cw20_token("REWARD").create_cw20_token("uLP");

    let creator = suite.creator();
    let another_creator = suite.senders[1].clone();
    let reward_token = suite.cw20_tokens[0].clone();
    let pool = suite.cw20_tokens[1].clone();

    suite.increase_allowance(creator.clone(), reward_token.clone(), Uint128::new(500u128));
    suite.create_incentive(
        creator,
        default_params(&reward_token, &pool, 500u128),
        |result| {
            result.unwrap();
        },
    );

    // the creator is part of the key, so the same parameters from another
    // account create a second incentive
    suite.increase_allowance(
        another_creator.clone(),
        reward_token.clone(),
        Uint128::new(500u128),
    );
    suite.create_incentive(
        another_creator,
        default_params(&reward_token, &pool, 500u128),
        |result| {
            result.unwrap();
        },
    );

    assert_eq!(suite.query_incentives().len(), 2);
}
