//! Role-gated panel selection.

use crate::models::{Role, User};

/// Which staff panel, if any, is shown above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVariant {
    None,
    Admin,
    Moderator,
}

/// Maps the current user to a panel. Readers and anonymous visitors get none.
pub fn panel_for(user: Option<&User>) -> PanelVariant {
    match user.map(|u| u.role) {
        Some(Role::Admin) => PanelVariant::Admin,
        Some(Role::Moderator) => PanelVariant::Moderator,
        Some(Role::Reader) | None => PanelVariant::None,
    }
}

/// Static content of a staff panel. Actions are inert labels.
#[derive(Debug, Clone, Copy)]
pub struct PanelContent {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub actions: &'static [PanelAction],
}

#[derive(Debug, Clone, Copy)]
pub struct PanelAction {
    pub icon: &'static str,
    pub label: &'static str,
}

const ADMIN_PANEL: PanelContent = PanelContent {
    icon: "Plus",
    title: "Панель администратора",
    description: "Создавайте и публикуйте новости, статьи, видео, фоторепортажи, афиши и прогнозы погоды",
    actions: &[
        PanelAction {
            icon: "FileText",
            label: "Новая статья",
        },
        PanelAction {
            icon: "Video",
            label: "Добавить видео",
        },
        PanelAction {
            icon: "Image",
            label: "Фоторепортаж",
        },
        PanelAction {
            icon: "Calendar",
            label: "Афиша",
        },
        PanelAction {
            icon: "Cloud",
            label: "Погода",
        },
    ],
};

const MODERATOR_PANEL: PanelContent = PanelContent {
    icon: "Shield",
    title: "Панель модератора",
    description: "Модерация комментариев и отзывов читателей",
    actions: &[PanelAction {
        icon: "MessageSquare",
        label: "Новые комментарии (8)",
    }],
};

impl PanelVariant {
    pub fn content(&self) -> Option<&'static PanelContent> {
        match self {
            PanelVariant::None => None,
            PanelVariant::Admin => Some(&ADMIN_PANEL),
            PanelVariant::Moderator => Some(&MODERATOR_PANEL),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelVariant::None => "none",
            PanelVariant::Admin => "admin",
            PanelVariant::Moderator => "moderator",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::login;

    #[test]
    fn test_panel_for_each_role() {
        assert_eq!(
            panel_for(Some(&login("admin@test.com", ""))),
            PanelVariant::Admin
        );
        assert_eq!(
            panel_for(Some(&login("moderator@test.com", ""))),
            PanelVariant::Moderator
        );
        assert_eq!(
            panel_for(Some(&login("jane@site.com", ""))),
            PanelVariant::None
        );
        assert_eq!(panel_for(None), PanelVariant::None);
    }

    #[test]
    fn test_panel_content() {
        assert!(PanelVariant::None.content().is_none());
        let admin = PanelVariant::Admin.content().unwrap();
        assert_eq!(admin.title, "Панель администратора");
        assert_eq!(admin.actions.len(), 5);
        let moderator = PanelVariant::Moderator.content().unwrap();
        assert_eq!(moderator.actions[0].label, "Новые комментарии (8)");
    }
}
