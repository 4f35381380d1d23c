use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

/// Inline validation message for one form field.
///
/// Renders nothing while the field has no message; recoverable by user
/// correction, so it disappears on the next successful submit.
#[component]
pub fn FieldError(
    /// Validation map of the last failed submit
    #[prop(into)]
    errors: Signal<Option<ValidationErrors>>,
    /// Field key in the map
    field: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            errors
                .get()
                .and_then(|e| e.get(field).map(str::to_string))
                .map(|message| {
                    view! { <div class="form__field-error">{message}</div> }
                })
        }}
    }
}
