// ============================================================================
// EVENT HANDLING - Listeners sobre elementos estáticos de la página
// ============================================================================
// Los listeners se registran UNA vez al iniciar la página sobre elementos
// que nunca se reemplazan (contenedores, formulario, buscador), así que
// `closure.forget()` no acumula nada.
// Los botones de acción se re-renderizan con innerHTML: se delega el click
// en el contenedor y se lee `data-action` / `data-id`.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, InputEvent, MouseEvent, SubmitEvent};

use crate::utils::{ACTION_ATTRIBUTE, ID_ATTRIBUTE};
use crate::views::UserAction;

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para crear input handler simple
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Pérdida de foco (validación al salir del campo)
pub fn on_blur<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Submit de formulario con `preventDefault` ya aplicado
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: SubmitEvent| {
        event.prevent_default();
        handler();
    }) as Box<dyn FnMut(SubmitEvent)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click delegado: busca el botón más cercano con `data-action` dentro del contenedor
pub fn on_action<F>(container: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(UserAction) + 'static,
{
    on_click(container, move |event: MouseEvent| {
        if let Some(action) = action_from_event(&event) {
            event.prevent_default();
            handler(action);
        }
    })
}

fn action_from_event(event: &Event) -> Option<UserAction> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(&format!("[{}]", ACTION_ATTRIBUTE)).ok()??;
    if button.has_attribute("disabled") {
        return None;
    }
    UserAction::from_attributes(
        button.get_attribute(ACTION_ATTRIBUTE).as_deref(),
        button.get_attribute(ID_ATTRIBUTE).as_deref(),
    )
}
