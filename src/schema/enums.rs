//! Enumerated value sets of the CloudWatch Logs API.
//!
//! Each enum serializes to the exact literal the service uses, and exposes
//! `VALUES` so shapes can validate untyped input against the same set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a string-literal enum.
///
/// Generates: enum with serde renames, `VALUES`, `as_str()`, Display.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted literal, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum!(
    /// Storage class of a log group.
    LogGroupClass {
        Standard => "STANDARD",
        InfrequentAccess => "INFREQUENT_ACCESS",
        Delivery => "DELIVERY",
    }
);

string_enum!(
    /// Data protection policy state of a log group.
    DataProtectionStatus {
        Activated => "ACTIVATED",
        Deleted => "DELETED",
        Archived => "ARCHIVED",
        Disabled => "DISABLED",
    }
);

string_enum!(
    /// Property a log group inherits from account-level settings.
    InheritedProperty {
        AccountDataProtection => "ACCOUNT_DATA_PROTECTION",
    }
);

string_enum!(
    /// Ordering of `describe_log_streams` results.
    OrderBy {
        LogStreamName => "LogStreamName",
        LastEventTime => "LastEventTime",
    }
);

string_enum!(
    /// Reason an entity attached to `put_log_events` was rejected.
    EntityRejectionErrorType {
        InvalidEntity => "InvalidEntity",
        InvalidTypeValue => "InvalidTypeValue",
        InvalidKeyAttributes => "InvalidKeyAttributes",
        InvalidAttributes => "InvalidAttributes",
        EntitySizeTooLarge => "EntitySizeTooLarge",
        UnsupportedLogGroupType => "UnsupportedLogGroupType",
        MissingRequiredFields => "MissingRequiredFields",
    }
);

string_enum!(
    /// Query language of a Logs Insights query.
    QueryLanguage {
        Cwli => "CWLI",
        Sql => "SQL",
        Ppl => "PPL",
    }
);

string_enum!(
    /// Lifecycle state of a Logs Insights query.
    QueryStatus {
        Scheduled => "Scheduled",
        Running => "Running",
        Complete => "Complete",
        Failed => "Failed",
        Cancelled => "Cancelled",
        Timeout => "Timeout",
        Unknown => "Unknown",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    fn serialized<T: Serialize>(value: T) -> String {
        serde_json::to_value(value)
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_values_match_serde_names() {
        let classes = [
            LogGroupClass::Standard,
            LogGroupClass::InfrequentAccess,
            LogGroupClass::Delivery,
        ];
        let names: Vec<String> = classes.iter().map(|c| serialized(*c)).collect();
        assert_eq!(names, LogGroupClass::VALUES);

        let statuses = [
            QueryStatus::Scheduled,
            QueryStatus::Running,
            QueryStatus::Complete,
            QueryStatus::Failed,
            QueryStatus::Cancelled,
            QueryStatus::Timeout,
            QueryStatus::Unknown,
        ];
        let names: Vec<String> = statuses.iter().map(|s| serialized(*s)).collect();
        assert_eq!(names, QueryStatus::VALUES);
    }

    #[test]
    fn test_deserialize_rejects_unknown_literal() {
        let result: Result<OrderBy, _> = serde_json::from_str("\"Random\"");
        assert!(result.is_err());
        let parsed: OrderBy = serde_json::from_str("\"LastEventTime\"").unwrap();
        assert_eq!(parsed, OrderBy::LastEventTime);
    }

    #[test]
    fn test_display_uses_wire_literal() {
        assert_eq!(QueryLanguage::Cwli.to_string(), "CWLI");
        assert_eq!(InheritedProperty::AccountDataProtection.as_str(), "ACCOUNT_DATA_PROTECTION");
    }
}
