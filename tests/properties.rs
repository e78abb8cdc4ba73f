//! Property tests for carrier resolution, bundle amounts and form encoding.

use proptest::prelude::*;
use smsgh_vas::domain::carrier::{TOP_UP_NETWORKS, resolve};
use smsgh_vas::{UtilityOperation, ValidationError, is_allowed_bundle_amount, serialize_form};
use url::form_urlencoded;

const KNOWN: [&str; 7] = ["mtn", "vodafone", "expresso", "airtel", "tigo", "glo", "globacom"];

proptest! {
    #[test]
    fn resolve_ignores_case(
        index in 0..KNOWN.len(),
        upper in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let name = KNOWN[index];
        let variant = name
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect::<String>();
        prop_assert_eq!(resolve(&variant).unwrap(), resolve(name).unwrap());
    }

    #[test]
    fn resolve_rejects_other_names(name in "[a-z]{1,12}") {
        prop_assume!(!KNOWN.contains(&name.as_str()));
        prop_assert_eq!(
            resolve(&name),
            Err(ValidationError::UnknownCarrier { input: name.clone() })
        );
    }

    #[test]
    fn bundle_operations_reject_disallowed_amounts(amount in any::<u32>()) {
        prop_assume!(!is_allowed_bundle_amount(amount));
        prop_assert_eq!(
            UtilityOperation::bundle_surfline_plus("233200000000", amount),
            Err(ValidationError::BundleAmountNotAllowed { actual: amount })
        );
    }

    #[test]
    fn serialized_form_parses_back(
        national in "[0-9]{9}",
        line_type in 0u8..=1,
        network in 0..TOP_UP_NETWORKS.len(),
        amount in 1u32..100_000,
        api_key in "[ -~]{1,32}",
    ) {
        let fields = vec![
            ("phone", format!("233{national}")),
            ("line-type", line_type.to_string()),
            ("network", TOP_UP_NETWORKS[network].to_owned()),
            ("amount", amount.to_string()),
            ("api-key", api_key),
        ];
        let encoded = serialize_form(
            fields.iter().map(|(key, value)| (*key, Some(value.clone()))),
            true,
        );

        let decoded = form_urlencoded::parse(encoded.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect::<Vec<_>>();
        let expected = fields
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect::<Vec<_>>();
        prop_assert_eq!(decoded, expected);
    }
}
