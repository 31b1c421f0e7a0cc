// ============================================================================
// ACTIONS - Botones de acción dentro de los listados
// ============================================================================
// Cada botón lleva `data-action` + `data-id`; la página escucha clicks en
// el contenedor y los traduce a `UserAction`.
// ============================================================================

use crate::dom::{icon, ElementBuilder, Markup};
use crate::utils::{ACTION_ATTRIBUTE, ID_ATTRIBUTE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Reserve,
    Loan,
    Return,
    Cancel,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Reserve => "reserve",
            ActionKind::Loan => "loan",
            ActionKind::Return => "return",
            ActionKind::Cancel => "cancel",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "reserve" => Some(ActionKind::Reserve),
            "loan" => Some(ActionKind::Loan),
            "return" => Some(ActionKind::Return),
            "cancel" => Some(ActionKind::Cancel),
            _ => None,
        }
    }
}

/// Acción concreta sobre una entidad
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserAction {
    pub kind: ActionKind,
    pub id: i64,
}

impl UserAction {
    /// A partir de los atributos `data-action` / `data-id` del botón clickeado
    pub fn from_attributes(action: Option<&str>, id: Option<&str>) -> Option<Self> {
        let kind = ActionKind::parse(action?.trim())?;
        let id = id?.trim().parse().ok()?;
        Some(Self { kind, id })
    }
}

pub fn action_button(
    kind: ActionKind,
    id: i64,
    class: &str,
    icon_name: &str,
    label: &str,
    enabled: bool,
) -> Markup {
    ElementBuilder::new("button")
        .class(class)
        .attr("type", "button")
        .attr(ACTION_ATTRIBUTE, kind.as_str())
        .attr(ID_ATTRIBUTE, &id.to_string())
        .flag("disabled", !enabled)
        .child(icon(icon_name, "me-1"))
        .text(label)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_button_attributes() {
        assert_eq!(
            UserAction::from_attributes(Some("return"), Some("12")),
            Some(UserAction { kind: ActionKind::Return, id: 12 })
        );
        assert_eq!(UserAction::from_attributes(Some("borrar"), Some("1")), None);
        assert_eq!(UserAction::from_attributes(Some("loan"), Some("x")), None);
        assert_eq!(UserAction::from_attributes(None, Some("1")), None);
    }

    #[test]
    fn disabled_buttons_carry_the_flag() {
        let markup = action_button(ActionKind::Loan, 5, "btn", "arrow-left-right", "Prestar", false);
        assert!(markup.contains("data-action=\"loan\""));
        assert!(markup.contains("data-id=\"5\""));
        assert!(markup.contains(" disabled>"));
    }
}
