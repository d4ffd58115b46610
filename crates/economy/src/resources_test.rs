use stellar_body::ResourceType;

use crate::resources::{
    calculate_difference_between_resources, player_can_afford_resource_requirement,
};

#[test]
fn test_player_can_afford_resources() {
    let price = (ResourceType::Red, 1.0);
    let holdings = [(ResourceType::Red, 2.0)];
    assert!(player_can_afford_resource_requirement(price, &holdings));
}

#[test]
fn test_player_cannot_afford_resources() {
    let price = (ResourceType::Red, 2.0);
    let holdings = [(ResourceType::Red, 1.0)];
    assert!(!player_can_afford_resource_requirement(price, &holdings));
}

#[test]
fn test_affordability_requires_matching_type() {
    let price = (ResourceType::Yellow, 1.0);
    let holdings = [(ResourceType::Red, 2.0)];
    assert!(!player_can_afford_resource_requirement(price, &holdings));
}

#[test]
fn test_exact_amount_is_affordable() {
    let price = (ResourceType::Blue, 5.0);
    let holdings = [(ResourceType::Blue, 5.0)];
    assert!(player_can_afford_resource_requirement(price, &holdings));
}

#[test]
fn test_empty_holdings_afford_nothing() {
    let price = (ResourceType::Green, 0.5);
    assert!(!player_can_afford_resource_requirement(price, &[]));
}

#[test]
fn test_difference_when_holding_exceeds_price() {
    let price = (ResourceType::Red, 2.0);
    let holdings = [
        (ResourceType::Red, 3.0),
        (ResourceType::Yellow, 10.0),
        (ResourceType::Blue, 5.0),
    ];

    let difference = calculate_difference_between_resources(price, &holdings);
    assert_eq!(
        difference,
        vec![
            (ResourceType::Red, 1.0),
            (ResourceType::Yellow, 10.0),
            (ResourceType::Blue, 5.0),
        ]
    );
}

#[test]
fn test_difference_leaves_holdings_when_price_is_too_high() {
    let price = (ResourceType::Red, 10.0);
    let holdings = [
        (ResourceType::Red, 3.0),
        (ResourceType::Yellow, 10.0),
        (ResourceType::Blue, 5.0),
    ];

    let difference = calculate_difference_between_resources(price, &holdings);
    assert_eq!(difference, holdings.to_vec());
}

#[test]
fn test_difference_leaves_holdings_when_price_equals_holding() {
    // Price equal to the holding also passes through unchanged
    let price = (ResourceType::Blue, 5.0);
    let holdings = [(ResourceType::Blue, 5.0), (ResourceType::Green, 1.0)];

    let difference = calculate_difference_between_resources(price, &holdings);
    assert_eq!(difference, holdings.to_vec());
}

#[test]
fn test_difference_ignores_other_types() {
    let price = (ResourceType::Purple, 1.0);
    let holdings = [(ResourceType::Orange, 2.0), (ResourceType::Purple, 4.0)];

    let difference = calculate_difference_between_resources(price, &holdings);
    assert_eq!(
        difference,
        vec![(ResourceType::Orange, 2.0), (ResourceType::Purple, 3.0)]
    );
}
