use crate::form::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Traffic source the downstream pageviews query is scoped to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    #[default]
    AllAccess,
    Desktop,
    MobileApp,
    MobileWeb,
}

impl Access {
    /// Every option, in the order the select widget lists them.
    pub const ALL: [Access; 4] = [
        Access::AllAccess,
        Access::Desktop,
        Access::MobileApp,
        Access::MobileWeb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Access::AllAccess => "all-access",
            Access::Desktop => "desktop",
            Access::MobileApp => "mobile-app",
            Access::MobileWeb => "mobile-web",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Access {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Access::ALL
            .into_iter()
            .find(|access| access.as_str() == s)
            .ok_or_else(|| FormError::InvalidAccess(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_option() {
        for access in Access::ALL {
            assert_eq!(access.as_str().parse::<Access>().unwrap(), access);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "tablet".parse::<Access>().unwrap_err();
        assert_eq!(err, FormError::InvalidAccess("tablet".to_string()));
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Access::MobileApp).unwrap();
        assert_eq!(json, "\"mobile-app\"");
        let access: Access = serde_json::from_str("\"all-access\"").unwrap();
        assert_eq!(access, Access::AllAccess);
    }
}
