/// Универсальные утилиты для работы со списками (поиск, сортировка, страницы, выделение)
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Значение колонки, приведённое к сравнимому виду.
///
/// Отсутствующие поля тип записи приводит к `Number(0.0)` или `Text("")`,
/// так что ключ есть у каждой строки.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Числа сравниваются как числа, текст с учётом регистра; числа идут раньше текста
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

pub fn contains_ignore_case(text: &str, filter: &str) -> bool {
    text.to_lowercase().contains(&filter.to_lowercase())
}

/// Разбивает текст на куски: `(кусок, совпал ли он с фильтром)`.
///
/// Сравнение идёт посимвольно по строчной форме каждого символа, а границы
/// кусков всегда совпадают с границами символов исходной строки.
pub fn split_matches<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let needle: Vec<char> = filter.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() || text.is_empty() {
        return vec![(text, false)];
    }

    // (строчный символ, начало и конец исходного символа в байтах)
    let lowered: Vec<(char, usize, usize)> = text
        .char_indices()
        .flat_map(|(i, c)| c.to_lowercase().map(move |lc| (lc, i, i + c.len_utf8())))
        .collect();

    let mut parts = Vec::new();
    let mut last_end = 0;
    let mut pos = 0;
    while pos + needle.len() <= lowered.len() {
        let window = &lowered[pos..pos + needle.len()];
        if !window.iter().map(|(c, _, _)| *c).eq(needle.iter().copied()) {
            pos += 1;
            continue;
        }
        let start = window[0].1;
        let end = window[needle.len() - 1].2;
        // a char whose lowercase form is several chars may already be highlighted
        if start >= last_end {
            if start > last_end {
                parts.push((&text[last_end..start], false));
            }
            parts.push((&text[start..end], true));
            last_end = end;
        }
        pos += needle.len();
    }

    if last_end < text.len() {
        parts.push((&text[last_end..], false));
    }
    parts
}

/// Подсветка совпадений в тексте (без учёта регистра)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = split_matches(text, filter)
        .into_iter()
        .map(|(part, matched)| {
            let part = part.to_string();
            if matched {
                view! { <mark class="table__match">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Сортирует список по указанному полю.
///
/// `sort_by` стабильна, а DESC разворачивает компаратор, а не результат:
/// равные ключи сохраняют исходный порядок в обоих направлениях.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу. Пустой запрос возвращает список как есть.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Filter, then sort. Without an active sort column the input order is kept.
pub fn apply_query<T: Searchable + Sortable + Clone>(
    items: &[T],
    filter: &str,
    sort: &SortState,
) -> Vec<T> {
    let mut result = filter_list(items.to_vec(), filter);
    if sort.is_active() {
        sort_list(&mut result, &sort.field, sort.ascending);
    }
    result
}

/// Срез текущей страницы. Страница за пределами списка даёт пустой срез.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Сколько пустых строк дорисовать, чтобы высота таблицы не прыгала на последней странице
pub fn empty_rows(page: usize, page_size: usize, total_count: usize) -> usize {
    page.saturating_add(1)
        .saturating_mul(page_size)
        .saturating_sub(total_count)
        .min(page_size)
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// "Nothing matched the filter", as opposed to "there is nothing to show"
pub fn is_not_found(filter: &str, filtered_count: usize) -> bool {
    !filter.is_empty() && filtered_count == 0
}

/// Варианты размера страницы для селектора
pub fn rows_per_page_options(record_count: usize) -> Vec<usize> {
    let mut options = vec![5, 10, 25];
    if record_count > 25 {
        options.push(record_count);
    }
    options
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS класс индикатора сортировки
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Текущая сортировка таблицы. Пустое поле: сортировки нет, порядок как пришёл с сервера.
#[derive(Debug, Clone, PartialEq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self::new("")
    }
}

impl SortState {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.field.is_empty()
    }

    /// Клик по заголовку: та же колонка меняет направление, другая сбрасывает на ASC.
    /// Колонки без id (действия) не сортируются.
    pub fn request(&mut self, field: &str) {
        if field.is_empty() {
            return;
        }
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }
}

/// Текущая страница и её размер
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page: usize,
    pub page_size: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn reset_page(&mut self) {
        self.page = 0;
    }
}

/// Выделенные строки (по id записи)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Чекбокс в заголовке: checked выделяет ровно `all_ids`, unchecked снимает всё
    pub fn set_all<I>(&mut self, checked: bool, all_ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        if checked {
            self.ids = all_ids.into_iter().collect();
        } else {
            self.ids.clear();
        }
    }
}

/// Поле поиска с кнопкой очистки
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
