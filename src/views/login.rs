// ============================================================================
// LOGIN VIEW - Piezas del formulario de login
// ============================================================================
// El formulario está en la plantilla; aquí solo se decide qué clases,
// iconos y etiquetas lleva según su estado.
// ============================================================================

use crate::dom::{icon, ElementBuilder, Markup};

pub const LOGOUT_OVERLAY_ID: &str = "logout-loading-overlay";

/// Validación en vivo de un campo obligatorio
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValidity {
    Valid,
    Invalid,
}

impl FieldValidity {
    /// Vacío (o solo espacios) es inválido
    pub fn of(value: &str) -> Self {
        if value.trim().is_empty() {
            FieldValidity::Invalid
        } else {
            FieldValidity::Valid
        }
    }

    /// Clase a poner
    pub fn class(&self) -> &'static str {
        match self {
            FieldValidity::Valid => "is-valid",
            FieldValidity::Invalid => "is-invalid",
        }
    }

    /// Clase a quitar
    pub fn opposite_class(&self) -> &'static str {
        match self {
            FieldValidity::Valid => "is-invalid",
            FieldValidity::Invalid => "is-valid",
        }
    }
}

/// Visibilidad del campo de contraseña (botón `#toggle-password`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordVisibility {
    Hidden,
    Shown,
}

impl PasswordVisibility {
    /// A partir del atributo `type` actual del input
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type == "password" {
            PasswordVisibility::Hidden
        } else {
            PasswordVisibility::Shown
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PasswordVisibility::Hidden => PasswordVisibility::Shown,
            PasswordVisibility::Shown => PasswordVisibility::Hidden,
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            PasswordVisibility::Hidden => "password",
            PasswordVisibility::Shown => "text",
        }
    }

    /// Ojo abierto mientras está oculta, tachado mientras se ve
    pub fn toggle_icon(&self) -> Markup {
        match self {
            PasswordVisibility::Hidden => icon("eye", ""),
            PasswordVisibility::Shown => icon("eye-slash", ""),
        }
    }
}

/// Contenido del botón de envío: spinner mientras se procesa
pub fn submit_button_label(busy: bool) -> Markup {
    if busy {
        Markup::concat(vec![
            ElementBuilder::new("span")
                .class("spinner-border spinner-border-sm")
                .attr("role", "status")
                .attr("aria-hidden", "true")
                .build(),
            ElementBuilder::new("span").text(" Procesando...").build(),
        ])
    } else {
        Markup::concat(vec![
            icon("box-arrow-in-right", "me-2"),
            ElementBuilder::new("span").text("Iniciar Sesión").build(),
        ])
    }
}

/// Capa bloqueante mientras se cierra la sesión
pub fn render_logout_overlay() -> Markup {
    ElementBuilder::new("div")
        .attr("id", LOGOUT_OVERLAY_ID)
        .attr(
            "style",
            "position: fixed; inset: 0; background: rgba(0,0,0,0.8); display: flex; \
             align-items: center; justify-content: center; z-index: 9999; backdrop-filter: blur(10px);",
        )
        .child(
            ElementBuilder::new("div")
                .class("text-center text-white")
                .child(
                    ElementBuilder::new("div")
                        .class("spinner-border mb-3")
                        .attr("style", "width: 3rem; height: 3rem;")
                        .build(),
                )
                .child(ElementBuilder::new("h5").class("fw-semibold").text("Cerrando Sesión").build())
                .child(
                    ElementBuilder::new("p")
                        .class("mb-0 text-white-50")
                        .text("Por favor espere...")
                        .build(),
                )
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_invalid() {
        assert_eq!(FieldValidity::of("   "), FieldValidity::Invalid);
        assert_eq!(FieldValidity::of(""), FieldValidity::Invalid);
        let valid = FieldValidity::of(" admin ");
        assert_eq!(valid.class(), "is-valid");
        assert_eq!(valid.opposite_class(), "is-invalid");
    }

    #[test]
    fn password_toggle_flips_type_and_icon() {
        let hidden = PasswordVisibility::from_input_type("password");
        assert_eq!(hidden, PasswordVisibility::Hidden);
        assert!(hidden.toggle_icon().contains("bi-eye\""));

        let shown = hidden.toggled();
        assert_eq!(shown.input_type(), "text");
        assert!(shown.toggle_icon().contains("bi-eye-slash"));
        assert_eq!(shown.toggled().input_type(), "password");
    }

    #[test]
    fn submit_label_reflects_processing() {
        assert!(submit_button_label(true).contains("Procesando..."));
        assert!(submit_button_label(true).contains("spinner-border-sm"));
        let idle = submit_button_label(false);
        assert!(idle.contains("Iniciar Sesión"));
        assert!(!idle.contains("spinner"));
    }

    #[test]
    fn logout_overlay_has_stable_id() {
        let overlay = render_logout_overlay();
        assert!(overlay.contains("id=\"logout-loading-overlay\""));
        assert!(overlay.contains("Cerrando Sesión"));
    }
}
