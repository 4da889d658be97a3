// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_extra_math::prelude::*;
use fluxion_extra_math::Natural;
use fluxion_extra_test_utils::person::{people, person_baby, person_grandpa, Person};
use fluxion_extra_test_utils::sequence_of;
use std::cmp::Ordering;

struct ByAge;

impl Comparator<Person> for ByAge {
    fn compare(&self, left: &Person, right: &Person) -> Ordering {
        left.age.cmp(&right.age)
    }
}

#[tokio::test]
async fn test_min_and_max_by_comparator_type() -> anyhow::Result<()> {
    // Act
    let youngest = sequence_of(people()).min_by(ByAge).await?;
    let oldest = sequence_of(people()).max_by(ByAge).await?;

    // Assert
    assert_eq!(youngest, Some(person_baby()));
    assert_eq!(oldest, Some(person_grandpa()));

    Ok(())
}

#[tokio::test]
async fn test_closure_selects_same_element_as_comparator_type() -> anyhow::Result<()> {
    // Act
    let youngest = sequence_of(people())
        .min_with(|left: &Person, right: &Person| left.age.cmp(&right.age))
        .await?;

    // Assert
    assert_eq!(youngest, Some(person_baby()));

    Ok(())
}

#[tokio::test]
async fn test_inverted_closure_selects_opposite_element() -> anyhow::Result<()> {
    // Act
    let selected = sequence_of(people())
        .min_with(|left: &Person, right: &Person| right.age.cmp(&left.age))
        .await?;

    // Assert
    assert_eq!(selected, Some(person_grandpa()));

    Ok(())
}

#[tokio::test]
async fn test_reversed_comparator_swaps_min_and_max() -> anyhow::Result<()> {
    // Act
    let selected = sequence_of(people()).min_by(ByAge.reversed()).await?;

    // Assert
    assert_eq!(selected, Some(person_grandpa()));

    Ok(())
}

#[tokio::test]
async fn test_comparing_by_key() -> anyhow::Result<()> {
    // Act
    let first_by_name = sequence_of(people())
        .min_by(comparing(|person: &Person| person.name.clone()))
        .await?;

    // Assert
    assert_eq!(first_by_name, Some(person_baby()));

    Ok(())
}

#[test]
fn test_natural_order_sorts_nan_above_numbers() {
    assert_eq!(Natural.compare(&f64::NAN, &1.0), Ordering::Greater);
    assert_eq!(Natural.compare(&1.0, &f64::NAN), Ordering::Less);
    assert_eq!(
        Natural.compare(&f64::NAN, &f64::INFINITY),
        Ordering::Greater
    );
    assert_eq!(Natural.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
    assert_eq!(Natural.compare(&1.0, &2.0), Ordering::Less);
}

#[tokio::test]
async fn test_min_skips_nan_and_max_selects_it() -> anyhow::Result<()> {
    // Act
    let min = sequence_of(vec![f64::NAN, 1.0, -2.5]).min().await?;
    let max = sequence_of(vec![1.0, f64::NAN, 3.0]).max().await?;

    // Assert
    assert_eq!(min, Some(-2.5));
    assert!(max.is_some_and(f64::is_nan));

    Ok(())
}
