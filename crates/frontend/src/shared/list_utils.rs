/// Search helpers for result tables: filtering, match highlighting and the
/// debounced search box.
use contracts::domain::a001_account::Account;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DEBOUNCE_MS: u32 = 300;

/// Types that can be matched against the search box
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

impl Searchable for Account {
    /// Email substring, case-insensitive
    fn matches_filter(&self, filter: &str) -> bool {
        self.email_contains(filter)
    }
}

/// Items matching the filter, in their original order; a blank filter
/// keeps everything
pub fn filter_list<'a, T: Searchable>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    if filter.trim().is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Byte ranges of `text` whose lowercase form equals the lowercased
/// `filter`, left to right without overlap. Ranges always fall on char
/// boundaries of `text`.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = filter.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start < text.len() {
        match match_len_at(&text[start..], &needle) {
            Some(len) => {
                ranges.push((start, start + len));
                start += len;
            }
            None => {
                start += text[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    ranges
}

/// Byte length of the prefix of `haystack` that lowercases to `needle`
fn match_len_at(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (idx, ch) in haystack.char_indices() {
        if matched == needle.len() {
            return Some(idx);
        }
        for lower in ch.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
    }
    (matched == needle.len()).then_some(haystack.len())
}

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter.trim());
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any(),
        );
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar por correo...".to_string()
    } else {
        placeholder
    };

    // Local input state (before debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Replacing the pending timeout drops it, which cancels it
    let debounce = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(DEBOUNCE_MS, move || on_change.run(new_value));
        debounce.set_value(Some(timeout));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        debounce.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                id="search-email"
                class="form__input"
                class:search-input--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    type="button"
                    class="search-input__clear"
                    on:click=clear_filter
                    title="Limpiar"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: i64, email: &str) -> Account {
        serde_json::from_value(serde_json::json!({"id": id, "email": email})).unwrap()
    }

    #[test]
    fn filter_is_case_insensitive() {
        let accounts = vec![
            account(1, "admin@x.com"),
            account(2, "user@x.com"),
            account(3, "ADMIN2@x.com"),
        ];

        let upper: Vec<_> = filter_list(&accounts, "ADM").iter().map(|a| a.id).collect();
        let lower: Vec<_> = filter_list(&accounts, "adm").iter().map(|a| a.id).collect();

        assert_eq!(upper, lower);
        assert_eq!(lower.len(), 2);
    }

    #[test]
    fn blank_filter_keeps_order() {
        let accounts = vec![account(2, "b@x.com"), account(1, "a@x.com")];
        let ids: Vec<_> = filter_list(&accounts, "  ").iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn match_ranges_ignore_case_and_do_not_overlap() {
        assert_eq!(match_ranges("Admin@X.com", "x.C"), vec![(6, 9)]);
        assert_eq!(match_ranges("aXa", "A"), vec![(0, 1), (2, 3)]);
        assert!(match_ranges("user@x.com", "zz").is_empty());
        assert!(match_ranges("user@x.com", "").is_empty());
    }

    #[test]
    fn match_ranges_stay_on_char_boundaries_when_case_changes_width() {
        // U+023A grows when lowercased, the Kelvin sign shrinks
        let text = "\u{23A}\u{23A}\u{212A}@x";
        let ranges = match_ranges(text, "k@");

        assert_eq!(ranges, vec![(4, 8)]);
        for (start, end) in ranges {
            assert!(text.is_char_boundary(start) && text.is_char_boundary(end));
        }
    }
}
