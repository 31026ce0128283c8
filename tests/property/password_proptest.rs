//! Property-based tests for password hashing

use proptest::prelude::*;
use ticketdesk::backend::auth::password::MIN_COST;
use ticketdesk::backend::auth::PasswordHasher;

use crate::runtime;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_hashes_are_salted_and_verify(password in "[ -~]{1,64}") {
        let hasher = PasswordHasher::new(MIN_COST);

        runtime().block_on(async {
            let first = hasher.hash(&password).await.unwrap();
            let second = hasher.hash(&password).await.unwrap();

            prop_assert_ne!(&first, &second);
            prop_assert_ne!(&first, &password);
            prop_assert!(hasher.verify(&password, &first).await.unwrap());
            prop_assert!(hasher.verify(&password, &second).await.unwrap());
            Ok::<(), TestCaseError>(())
        })?;
    }

    #[test]
    fn test_other_password_does_not_verify(password in "[ -~]{1,64}", suffix in "[ -~]") {
        let hasher = PasswordHasher::new(MIN_COST);
        let other = format!("{}{}", password, suffix);

        runtime().block_on(async {
            let hash = hasher.hash(&password).await.unwrap();
            prop_assert!(!hasher.verify(&other, &hash).await.unwrap());
            Ok::<(), TestCaseError>(())
        })?;
    }
}
