//! User records
//!
//! Users are a sum type over their role. The name is the global key of the
//! user collection; the password is stored in clear text exactly as the
//! files hold it.

use super::account::AccountKey;
use super::error::StoreError;
use super::item::{Item, ItemId};
use std::fmt;
use std::str::FromStr;

/// Role discriminant as written in the users file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleTag {
    Buyer,
    Seller,
    Admin,
}

impl RoleTag {
    /// The literal persisted for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleTag::Buyer => "Buyer",
            RoleTag::Seller => "Seller",
            RoleTag::Admin => "Admin",
        }
    }
}

impl FromStr for RoleTag {
    type Err = StoreError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "Buyer" => Ok(RoleTag::Buyer),
            "Seller" => Ok(RoleTag::Seller),
            "Admin" => Ok(RoleTag::Admin),
            other => Err(StoreError::unknown_role(other)),
        }
    }
}

impl fmt::Display for RoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role-specific data
#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    Buyer,
    Seller {
        store_name: String,
        inventory: Vec<Item>,
    },
    Admin,
}

/// A user of the system
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// Unique user name
    pub name: String,
    /// Clear-text password
    pub password: String,
    /// Linked bank account, if any. Admins never have one.
    pub account: Option<AccountKey>,
    /// Role and role-specific data
    pub role: Role,
}

impl UserRecord {
    /// A buyer with no account yet
    pub fn buyer(name: impl Into<String>, password: impl Into<String>) -> Self {
        UserRecord {
            name: name.into(),
            password: password.into(),
            account: None,
            role: Role::Buyer,
        }
    }

    /// A seller running `store_name`, with an empty inventory
    pub fn seller(
        name: impl Into<String>,
        password: impl Into<String>,
        store_name: impl Into<String>,
    ) -> Self {
        UserRecord {
            name: name.into(),
            password: password.into(),
            account: None,
            role: Role::Seller {
                store_name: store_name.into(),
                inventory: Vec::new(),
            },
        }
    }

    /// An administrator; never holds an account
    pub fn admin(name: impl Into<String>, password: impl Into<String>) -> Self {
        UserRecord {
            name: name.into(),
            password: password.into(),
            account: None,
            role: Role::Admin,
        }
    }

    /// The role discriminant, as persisted
    pub fn role_tag(&self) -> RoleTag {
        match self.role {
            Role::Buyer => RoleTag::Buyer,
            Role::Seller { .. } => RoleTag::Seller,
            Role::Admin => RoleTag::Admin,
        }
    }

    /// Whether this user runs a store
    pub fn is_seller(&self) -> bool {
        matches!(self.role, Role::Seller { .. })
    }

    /// Whether this user is an administrator
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// Store name for sellers
    pub fn store_name(&self) -> Option<&str> {
        match &self.role {
            Role::Seller { store_name, .. } => Some(store_name),
            _ => None,
        }
    }

    /// Seller inventory; empty for other roles
    pub fn inventory(&self) -> &[Item] {
        match &self.role {
            Role::Seller { inventory, .. } => inventory,
            _ => &[],
        }
    }

    /// Link a bank account
    ///
    /// Returns false, leaving the user unchanged, for admins.
    pub fn attach_account(&mut self, key: AccountKey) -> bool {
        if self.is_admin() {
            return false;
        }
        self.account = Some(key);
        true
    }

    /// Append an item to a seller's inventory
    ///
    /// Returns false for non-sellers.
    pub fn add_item(&mut self, item: Item) -> bool {
        match &mut self.role {
            Role::Seller { inventory, .. } => {
                inventory.push(item);
                true
            }
            _ => false,
        }
    }

    /// Remove every inventory item with the given id
    ///
    /// Returns true if anything was removed.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        match &mut self.role {
            Role::Seller { inventory, .. } => {
                let before = inventory.len();
                inventory.retain(|item| item.id != id);
                inventory.len() != before
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case("Buyer", RoleTag::Buyer)]
    #[case("Seller", RoleTag::Seller)]
    #[case("Admin", RoleTag::Admin)]
    fn test_role_tag_parsing(#[case] text: &str, #[case] expected: RoleTag) {
        assert_eq!(text.parse::<RoleTag>().unwrap(), expected);
        assert_eq!(expected.as_str(), text);
    }

    #[rstest]
    #[case::lowercase("buyer")]
    #[case::unknown("Guest")]
    #[case::empty("")]
    fn test_unknown_roles_rejected(#[case] text: &str) {
        assert_eq!(text.parse::<RoleTag>(), Err(StoreError::unknown_role(text)));
    }

    #[test]
    fn test_admin_refuses_account() {
        let mut admin = UserRecord::admin("root", "pw");
        assert!(!admin.attach_account(AccountKey(0)));
        assert_eq!(admin.account, None);

        let mut buyer = UserRecord::buyer("Ann", "pw");
        assert!(buyer.attach_account(AccountKey(0)));
        assert_eq!(buyer.account, Some(AccountKey(0)));
    }

    #[test]
    fn test_seller_inventory_management() {
        let mut seller = UserRecord::seller("Bob", "pw", "Bob's Shop");
        let pen = Item::new(1, "Pen", 5, Decimal::new(150, 2)).unwrap();
        let cup = Item::new(2, "Cup", 1, Decimal::new(300, 2)).unwrap();

        assert!(seller.add_item(pen));
        assert!(seller.add_item(cup));
        assert_eq!(seller.inventory().len(), 2);

        assert!(seller.remove_item(1));
        assert!(!seller.remove_item(1));
        assert_eq!(seller.inventory()[0].name, "Cup");
        assert_eq!(seller.store_name(), Some("Bob's Shop"));
    }

    #[test]
    fn test_buyer_has_no_inventory() {
        let mut buyer = UserRecord::buyer("Ann", "pw");
        let pen = Item::new(1, "Pen", 5, Decimal::new(150, 2)).unwrap();

        assert!(!buyer.add_item(pen));
        assert!(buyer.inventory().is_empty());
        assert_eq!(buyer.store_name(), None);
    }
}
