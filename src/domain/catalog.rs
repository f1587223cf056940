use super::error::CatalogError;
use super::models::{Accent, BotCommand, Category};
use std::collections::HashSet;

pub const DEFAULT_CATEGORY: &str = "teams";

/// Read-only table of feature categories, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    categories: Vec<Category>,
}

impl CatalogStore {
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut ids = HashSet::new();
        for category in &categories {
            if category.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }

            let mut names = HashSet::new();
            for command in &category.commands {
                if !names.insert(command.name.as_str()) {
                    return Err(CatalogError::DuplicateCommand {
                        category: category.id.clone(),
                        name: command.name.clone(),
                    });
                }
            }
        }

        Ok(Self { categories })
    }

    /// The HavenModeration feature catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            categories: builtin_categories(),
        }
    }

    pub fn get(&self, id: &str) -> Result<&Category, CatalogError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn all(&self) -> impl Iterator<Item = (&str, &Category)> + '_ {
        self.categories.iter().map(|c| (c.id.as_str(), c))
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    #[must_use]
    pub fn category_at(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new(
            "teams",
            "Team Management",
            "Create and manage moderation teams with dedicated team leads.",
            "users",
            Accent::Blue,
            vec![
                BotCommand::new("/team create", "Create a new team with a designated team lead"),
                BotCommand::new("/team edit name", "Change a team's name"),
                BotCommand::new("/team edit team_lead", "Assign a new team lead"),
                BotCommand::new("/teamswap", "Move staff between teams"),
                BotCommand::new("/teamdashboard init", "Initialize the team dashboard"),
            ],
        ),
        Category::new(
            "moderation",
            "Moderation Tools",
            "Comprehensive tools for managing staff and enforcing rules.",
            "shield",
            Accent::Red,
            vec![
                BotCommand::new("/strike add", "Issue a strike to a staff member"),
                BotCommand::new("/strike remove", "Remove an active strike"),
                BotCommand::new("/strike view", "View a staff member's strikes"),
                BotCommand::new("/blacklist add", "Add a user to the blacklist"),
                BotCommand::new("/blacklist view", "View blacklist entries"),
            ],
        ),
        Category::new(
            "staff",
            "Staff Management",
            "Enroll and manage staff members with various ranks.",
            "award",
            Accent::Yellow,
            vec![
                BotCommand::new("/enroll", "Add new staff members to the system"),
                BotCommand::new("/fire", "Remove staff members from the system"),
                BotCommand::new("/profile", "View staff member profiles"),
                BotCommand::new("/pay check", "Check your monthly compensation"),
            ],
        ),
        Category::new(
            "tracking",
            "Activity Tracking",
            "Monitor and analyze staff performance and activity.",
            "target",
            Accent::Green,
            vec![
                BotCommand::new("/statistics", "View department-wide statistics"),
                BotCommand::new("Auto Modcall", "Automatic tracking of modcall claims"),
                BotCommand::new("/cooldown", "Check rank change cooldowns"),
            ],
        ),
        Category::new(
            "utility",
            "Utility Features",
            "Additional tools and features for staff use.",
            "brain",
            Accent::Mauve,
            vec![
                BotCommand::new("/request", "Submit rank change requests"),
                BotCommand::new("/pride", "Display pride flags"),
                BotCommand::new("/bot-info", "View bot information"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_validation() {
        let store = CatalogStore::new(builtin_categories()).unwrap();
        assert_eq!(store, CatalogStore::builtin());
        assert!(store.contains(DEFAULT_CATEGORY));
    }

    #[test]
    fn test_all_keeps_declaration_order_and_is_reiterable() {
        let store = CatalogStore::builtin();
        let first: Vec<&str> = store.all().map(|(id, _)| id).collect();
        let second: Vec<&str> = store.all().map(|(id, _)| id).collect();
        assert_eq!(first, vec!["teams", "moderation", "staff", "tracking", "utility"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = CatalogStore::builtin();
        assert_eq!(
            store.get("nonexistent"),
            Err(CatalogError::NotFound("nonexistent".to_string()))
        );
        assert_eq!(store.get("staff").unwrap().title, "Staff Management");
    }

    #[test]
    fn test_new_rejects_duplicate_category() {
        let a = Category::new("a", "A", "", "users", Accent::Blue, vec![]);
        let err = CatalogStore::new(vec![a.clone(), a]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCategory("a".to_string()));
    }

    #[test]
    fn test_new_rejects_duplicate_command_within_category() {
        let cat = Category::new(
            "a",
            "A",
            "",
            "users",
            Accent::Blue,
            vec![BotCommand::new("/x", "one"), BotCommand::new("/x", "two")],
        );
        assert!(matches!(
            CatalogStore::new(vec![cat]),
            Err(CatalogError::DuplicateCommand { .. })
        ));
    }

    #[test]
    fn test_new_rejects_empty_input() {
        assert_eq!(CatalogStore::new(vec![]), Err(CatalogError::EmptyCatalog));
        let blank = Category::new("", "Blank", "", "users", Accent::Blue, vec![]);
        assert_eq!(CatalogStore::new(vec![blank]), Err(CatalogError::EmptyId));
    }

    #[test]
    fn test_same_command_name_allowed_across_categories() {
        let a = Category::new("a", "A", "", "x", Accent::Blue, vec![BotCommand::new("/x", "")]);
        let b = Category::new("b", "B", "", "x", Accent::Red, vec![BotCommand::new("/x", "")]);
        assert!(CatalogStore::new(vec![a, b]).is_ok());
    }
}
