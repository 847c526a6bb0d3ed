//! Компонент чекбокса в заголовке таблицы для выбора всех строк
//!
//! # Примеры
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     selected_count=Signal::derive(move || state.with(|s| s.selection.len()))
//!     row_count=Signal::derive(move || state.with(|s| s.records.len()))
//!     on_change=Callback::new(move |check_all: bool| state.update(|s| s.select_all(check_all)))
//! />
//! ```

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Состояние чекбокса по количеству выбранных строк
pub fn header_checkbox_state(selected_count: usize, row_count: usize) -> CheckboxState {
    if row_count == 0 || selected_count == 0 {
        CheckboxState::Unchecked
    } else if selected_count >= row_count {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Компонент чекбокса в заголовке таблицы
///
/// Показывает три состояния: unchecked, checked, indeterminate.
/// Клик переключает между "выбрать все" и "снять все".
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)] selected_count: Signal<usize>,
    #[prop(into)] row_count: Signal<usize>,
    /// true = выбрать все, false = снять все
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state =
        Signal::derive(move || header_checkbox_state(selected_count.get(), row_count.get()));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства, атрибута нет
    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
        }
    });

    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_checkbox_state() {
        assert_eq!(header_checkbox_state(0, 0), CheckboxState::Unchecked);
        assert_eq!(header_checkbox_state(0, 3), CheckboxState::Unchecked);
        assert_eq!(header_checkbox_state(2, 3), CheckboxState::Indeterminate);
        assert_eq!(header_checkbox_state(3, 3), CheckboxState::Checked);
    }
}
