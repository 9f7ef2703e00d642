use crate::api::{ApiError, CODE_UNKNOWN, CODE_VALIDATION};
use crate::components::{empty_state::EmptyState, layout::ErrorMessage};
use leptos::*;
use serde_json::Value;

/// Field messages carried in `details`, either as `["msg", ...]`,
/// `{"errors": [...]}` or `{"field": "msg"}`.
pub fn detail_lines(error: &ApiError) -> Vec<String> {
    let Some(details) = error.details.as_ref() else {
        return Vec::new();
    };
    let details = details.get("errors").unwrap_or(details);
    match details {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .or_else(|| item.get("msg").and_then(Value::as_str).map(str::to_string))
            })
            .collect(),
        Value::Object(fields) => fields
            .iter()
            .filter_map(|(field, msg)| msg.as_str().map(|m| format!("{}: {}", field, m)))
            .collect(),
        Value::String(msg) => vec![msg.clone()],
        _ => Vec::new(),
    }
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .map(|e| {
                            let lines = detail_lines(&e);
                            if e.code == CODE_VALIDATION && !lines.is_empty() {
                                view! {
                                    <ul class="list-disc list-inside text-sm">
                                        {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                                    </ul>
                                }
                                .into_view()
                            } else if e.code != CODE_UNKNOWN && !e.code.is_empty() {
                                view! { <div class="text-xs opacity-75">"Code: "{e.code}</div> }.into_view()
                            } else {
                                ().into_view()
                            }
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Show>
    }
}

/// Failed detail load. Only a missing record reads as "not found"; transport
/// and server failures are logged and shown as an error.
#[component]
pub fn LoadFailure(error: ApiError, #[prop(into)] not_found: String) -> impl IntoView {
    if error.is_not_found() {
        return view! {
            <EmptyState
                title=not_found
                description="It may have been removed or the link is wrong."
                action_href="/"
                action_label="Back to home"
            />
        }
        .into_view();
    }
    log::error!("Load failed [{}]: {}", error.code, error.error);
    view! { <ErrorMessage message=format!("Could not load this page: {}", error.error) /> }.into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_details(details: Value) -> ApiError {
        ApiError {
            details: Some(details),
            ..ApiError::validation("Validation failed")
        }
    }

    #[test]
    fn detail_lines_accepts_each_shape() {
        assert_eq!(
            detail_lines(&with_details(json!({"errors": ["Title is required"]}))),
            vec!["Title is required"]
        );
        assert_eq!(
            detail_lines(&with_details(json!([{"msg": "Amount too low"}]))),
            vec!["Amount too low"]
        );
        assert_eq!(
            detail_lines(&with_details(json!({"email": "is invalid"}))),
            vec!["email: is invalid"]
        );
        assert!(detail_lines(&ApiError::unknown("x")).is_empty());
    }
}
