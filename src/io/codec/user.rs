//! User rows: `name,password,role,extra`
//!
//! `extra` is the store name for a Seller, `N/A` for an Admin and empty for a
//! Buyer. Decoded users carry no account and no inventory; the loader links
//! both afterwards.

use super::{require_fields, RecordCodec};
use crate::types::{Role, RoleTag, StoreError, UserRecord};

/// `extra` column written for an Admin
pub const ADMIN_EXTRA: &str = "N/A";

/// Codec for the users file
pub struct UserCodec;

impl RecordCodec for UserCodec {
    type Record = UserRecord;

    const ENTITY: &'static str = "UserRecord";

    fn encode(user: &UserRecord) -> String {
        let extra = match &user.role {
            Role::Buyer => "",
            Role::Seller { store_name, .. } => store_name.as_str(),
            Role::Admin => ADMIN_EXTRA,
        };
        format!("{},{},{},{}", user.name, user.password, user.role_tag(), extra)
    }

    fn decode(fields: &[&str]) -> Result<UserRecord, StoreError> {
        require_fields(fields, 3, Self::ENTITY)?;

        let (name, password) = (fields[0], fields[1]);
        let user = match fields[2].parse::<RoleTag>()? {
            RoleTag::Buyer => UserRecord::buyer(name, password),
            RoleTag::Seller => {
                UserRecord::seller(name, password, fields.get(3).copied().unwrap_or_default())
            }
            RoleTag::Admin => UserRecord::admin(name, password),
        };

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::buyer(UserRecord::buyer("Ann", "pw1"), "Ann,pw1,Buyer,")]
    #[case::seller(UserRecord::seller("Bob", "pw2", "Bob's Shop"), "Bob,pw2,Seller,Bob's Shop")]
    #[case::admin(UserRecord::admin("root", "toor"), "root,toor,Admin,N/A")]
    fn test_round_trip(#[case] user: UserRecord, #[case] line: &str) {
        assert_eq!(UserCodec::encode(&user), line);
        assert_eq!(UserCodec::decode_line(line).unwrap(), user);
    }

    #[test]
    fn test_decode_without_extra_column() {
        let user = UserCodec::decode_line("Ann,pw1,Buyer").unwrap();
        assert_eq!(user, UserRecord::buyer("Ann", "pw1"));

        let seller = UserCodec::decode_line("Bob,pw2,Seller").unwrap();
        assert_eq!(seller.store_name(), Some(""));
    }

    #[test]
    fn test_decoded_user_is_unlinked() {
        let seller = UserCodec::decode_line("Bob,pw2,Seller,Bob's Shop").unwrap();

        assert_eq!(seller.account, None);
        assert!(seller.inventory().is_empty());
    }

    #[rstest]
    #[case::unknown_role("Eve,pw,Hacker,", StoreError::unknown_role("Hacker"))]
    #[case::lowercase_role("Eve,pw,buyer,", StoreError::unknown_role("buyer"))]
    #[case::too_few("Eve,pw", StoreError::missing_fields("UserRecord", 3, 2))]
    fn test_decode_errors(#[case] line: &str, #[case] expected: StoreError) {
        assert_eq!(UserCodec::decode_line(line), Err(expected));
    }

    #[test]
    fn test_empty_password_is_kept() {
        let user = UserCodec::decode_line("Ann,,Buyer,").unwrap();
        assert_eq!(user.password, "");
    }
}
