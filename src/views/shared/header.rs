use crate::models::User;
use crate::platform::Slot;

/// Textos del header de usuario (nombre y rol, barra y dropdown)
pub fn user_header(user: &User) -> Vec<(Slot, String)> {
    vec![
        (Slot::UserName, user.full_name.clone()),
        (Slot::UserRole, user.role.clone()),
        (Slot::DropdownUserName, user.full_name.clone()),
        (Slot::DropdownUserRole, user.role.clone()),
    ]
}

/// "Bienvenido, Ana"
pub fn welcome_text(user: &User) -> String {
    format!("Bienvenido, {}", user.first_name())
}
