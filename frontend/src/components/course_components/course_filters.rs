//! Left-hand filter panel of the catalog page.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_image_icons::MdTune, md_navigation_icons::{MdClose, MdExpandLess, MdExpandMore}, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdStar}}};

use common::{
    catalog_const::{LANGUAGE_OPTIONS, PRICE_STEP, PRICE_UPPER_BOUND, RATING_THRESHOLDS},
    catalog_summary::{ActiveFilterChip, active_filter_chips, category_filter_options},
    course::CourseLevel,
    course_sort::SortOrder,
    filter_state::{DurationBucket, FilterField, FilterUpdate, PriceRange},
};
use crate::pages::courses_page::CatalogControl;

#[derive(Clone, Copy)]
struct FilterContext {
    control: CatalogControl,
}

#[component]
pub fn CourseFilters(control: CatalogControl, mut sort_order: Signal<SortOrder>) -> Element {
    use_context_provider(|| FilterContext { control });
    let mut is_open = use_signal(|| false);
    let has_active_filters = use_memo(move || control.snapshot.read().filters.has_active_filters());
    let panel_class = if is_open() { "afrolearn-filter-body afrolearn-filter-body-open" } else { "afrolearn-filter-body" };

    rsx! {
        div {
            id: "x-course-filters",
            class: "afrolearn-card",
            style: "padding: 20px; display:flex; flex-direction: column; gap: 20px;",

            div {
                style: "display:flex; align-items:center; justify-content: space-between;",
                div {
                    style: "display:flex; align-items:center; gap: 8px; font-size: 18px; font-weight: 600;",
                    Icon { icon: MdTune, style: "width: 20px; height: 20px;" }
                    "Filters"
                }
                div {
                    style: "display:flex; align-items:center; gap: 8px;",
                    if has_active_filters() {
                        button {
                            class: "afrolearn-button-link",
                            onclick: move |_| control.dispatch.call(FilterUpdate::Clear),
                            "Clear All"
                        }
                    }
                    button {
                        class: "afrolearn-filter-toggle",
                        onclick: move |_| is_open.set(!is_open()),
                        if is_open() {
                            Icon { icon: MdExpandLess, style: "width: 20px; height: 20px;" }
                        } else {
                            Icon { icon: MdExpandMore, style: "width: 20px; height: 20px;" }
                        }
                    }
                }
            }

            div {
                class: "{panel_class}",

                FilterSection { title: "Sort By",
                    select {
                        class: "afrolearn-input-box",
                        style: "width: 100%;",
                        value: "{sort_order().key()}",
                        onchange: move |event: Event<FormData>| {
                            if let Some(order) = SortOrder::from_key(&event.value()) {
                                sort_order.set(order);
                            }
                        },
                        for order in SortOrder::ALL {
                            option {
                                key: "{order.key()}",
                                value: "{order.key()}",
                                selected: order == sort_order(),
                                "{order.label()}"
                            }
                        }
                    }
                }

                CategoryFilterGroup {}

                FilterSection { title: "Level",
                    for level in CourseLevel::ALL {
                        FilterCheckbox {
                            key: "{level}",
                            field: FilterField::Level,
                            value: level.to_string(),
                            is_checked: control.snapshot.read().filters.level.contains(&level),
                        }
                    }
                }

                PriceRangeFilter {}

                RatingFilter {}

                FilterSection { title: "Language",
                    for language in LANGUAGE_OPTIONS {
                        FilterCheckbox {
                            key: "{language}",
                            field: FilterField::Language,
                            value: language.to_string(),
                            is_checked: control.snapshot.read().filters.language.contains(language),
                        }
                    }
                }

                FilterSection { title: "Duration",
                    for bucket in DurationBucket::ALL {
                        FilterCheckbox {
                            key: "{bucket.label()}",
                            field: FilterField::Duration,
                            value: bucket.label().to_string(),
                            is_checked: control.snapshot.read().filters.duration.contains(&bucket),
                        }
                    }
                }

                if has_active_filters() {
                    ActiveFilterChips {}
                }
            }
        }
    }
}

#[component]
fn FilterSection(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 6px; padding: 12px 0; border-bottom: 1px solid #F3F4F6;",
            h4 { style: "font-size: 15px; font-weight: 600; margin: 0 0 4px 0;", "{title}" }
            {children}
        }
    }
}

#[component]
fn CategoryFilterGroup() -> Element {
    let control = use_context::<FilterContext>().control;
    let options = use_hook(category_filter_options);
    rsx! {
        FilterSection { title: "Category",
            for option in options {
                FilterCheckbox {
                    key: "{option.name}",
                    field: FilterField::Categories,
                    is_checked: control.snapshot.read().filters.categories.contains(&option.name),
                    value: option.name.clone(),
                    count: Some(option.course_count),
                }
            }
        }
    }
}

#[component]
fn FilterCheckbox(field: FilterField, value: String, is_checked: bool, count: ReadSignal<Option<u32>>) -> Element {
    let control = use_context::<FilterContext>().control;
    let toggle_value = value.clone();
    rsx! {
        div {
            class: "afrolearn-filter-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 2px;
                align-items: center;
            ",
            onclick: move |_e| control.dispatch.call(FilterUpdate::Toggle(field, toggle_value.clone())),

            if is_checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #E8590C; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: #6B7280; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 15px;
                    color: #111827;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{value}"
            }
            div { style: "flex: 1 1 auto;", }
            if let Some(count) = count() {
                div {
                    style: "font-size: 14px; color: #6B7280; flex-shrink: 0;",
                    "({count})"
                }
            }
        }
    }
}

#[component]
fn PriceRangeFilter() -> Element {
    let control = use_context::<FilterContext>().control;
    let price = use_memo(move || control.snapshot.read().filters.price);
    let set_min = move |event: Event<FormData>| {
        let min = event.value().parse::<f64>().unwrap_or(0.0);
        control.dispatch.call(FilterUpdate::SetPriceRange(PriceRange::new(min, price().max)));
    };
    let set_max = move |event: Event<FormData>| {
        let max = event.value().parse::<f64>().unwrap_or(PRICE_UPPER_BOUND);
        control.dispatch.call(FilterUpdate::SetPriceRange(PriceRange::new(price().min, max)));
    };
    rsx! {
        FilterSection { title: "Price Range",
            div {
                style: "display:flex; align-items:center; gap: 8px;",
                input {
                    r#type: "number",
                    class: "afrolearn-input-box",
                    style: "width: 90px;",
                    min: "0",
                    max: "{PRICE_UPPER_BOUND}",
                    step: "{PRICE_STEP}",
                    value: "{price().min}",
                    onchange: set_min,
                }
                span { "to" }
                input {
                    r#type: "number",
                    class: "afrolearn-input-box",
                    style: "width: 90px;",
                    min: "0",
                    max: "{PRICE_UPPER_BOUND}",
                    step: "{PRICE_STEP}",
                    value: "{price().max}",
                    onchange: set_max,
                }
            }
            div {
                style: "display:flex; justify-content: space-between; font-size: 14px; color: #6B7280;",
                span { "${price().min}" }
                span { "${price().max}" }
            }
        }
    }
}

#[component]
fn RatingFilter() -> Element {
    let control = use_context::<FilterContext>().control;
    let rating = use_memo(move || control.snapshot.read().filters.rating);
    rsx! {
        FilterSection { title: "Rating",
            for threshold in RATING_THRESHOLDS {
                div {
                    key: "{threshold}",
                    class: "afrolearn-filter-item",
                    style: "display:flex; align-items:center; gap: 8px; cursor: pointer; padding: 2px;",
                    onclick: move |_| {
                        // selecting the active threshold again removes it
                        let next = if rating() == threshold { 0.0 } else { threshold };
                        control.dispatch.call(FilterUpdate::SetRating(next));
                    },
                    if rating() == threshold {
                        Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #E8590C;" }
                    } else {
                        Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: #6B7280;" }
                    }
                    Icon { icon: MdStar, style: "width: 18px; height: 18px; color: #FACC15;" }
                    span { style: "font-size: 15px;", "{threshold} & up" }
                }
            }
        }
    }
}

#[component]
fn ActiveFilterChips() -> Element {
    let control = use_context::<FilterContext>().control;
    let chips = use_memo(move || active_filter_chips(&control.snapshot.read().filters));
    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 8px; padding-top: 12px;",
            h4 { style: "font-size: 15px; font-weight: 600; margin: 0;", "Active Filters" }
            div {
                style: "display:flex; flex-wrap: wrap; gap: 6px;",
                for chip in chips() {
                    FilterChip { key: "{chip.field}-{chip.value}", chip }
                }
            }
        }
    }
}

#[component]
fn FilterChip(chip: ActiveFilterChip) -> Element {
    let control = use_context::<FilterContext>().control;
    let ActiveFilterChip { field, value } = chip;
    let label = value.clone();
    rsx! {
        span {
            class: "afrolearn-badge afrolearn-badge-secondary",
            style: "display:inline-flex; align-items:center; gap: 4px;",
            "{label}"
            button {
                style: "border:none; background:none; cursor:pointer; display:flex; padding: 0;",
                onclick: move |_| control.dispatch.call(FilterUpdate::Toggle(field, value.clone())),
                Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
            }
        }
    }
}
