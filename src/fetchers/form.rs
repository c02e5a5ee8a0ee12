use crate::http::CaseQuery;
use crate::CaseResult;
use log::{debug, trace};
use scraper::{ElementRef, Html, Selector};
use url::Url;

pub const CASE_TYPE_KEYWORDS: [&str; 4] = ["type", "ctype", "casetype", "case_type"];
pub const CASE_NUMBER_KEYWORDS: [&str; 5] = ["case_no", "cno", "caseno", "number", "case_number"];
pub const CASE_YEAR_KEYWORDS: [&str; 4] = ["year", "case_year", "cyear", "year_field"];
pub const SUBMIT_KEYWORDS: [&str; 7] = ["search", "submit", "find", "go", "show", "get", "view"];

const TEXT_INPUT_TYPES: [&str; 4] = ["text", "search", "tel", "number"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseField {
    Type,
    Number,
    Year,
}

/// A filled-in search form ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub method: FormMethod,
    pub action: Url,
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// The attributes a human would read to guess what a control is for.
fn descriptor(element: &ElementRef<'_>) -> String {
    ["name", "id", "placeholder", "aria-label"]
        .iter()
        .filter_map(|attr| element.value().attr(attr))
        .filter(|value| !value.is_empty())
        .map(|value| value.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn matches_any(descriptor: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| descriptor.contains(keyword))
}

fn classify(element: &ElementRef<'_>) -> Option<CaseField> {
    let descriptor = descriptor(element);
    if matches_any(&descriptor, &CASE_TYPE_KEYWORDS) {
        Some(CaseField::Type)
    } else if matches_any(&descriptor, &CASE_NUMBER_KEYWORDS) {
        Some(CaseField::Number)
    } else if matches_any(&descriptor, &CASE_YEAR_KEYWORDS) {
        Some(CaseField::Year)
    } else {
        None
    }
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn option_value(option: &ElementRef<'_>) -> String {
    option
        .value()
        .attr("value")
        .map(str::to_string)
        .unwrap_or_else(|| element_text(option))
}

fn select_value(select: &ElementRef<'_>, case_type: Option<&str>) -> Option<String> {
    let options: Vec<ElementRef<'_>> = select
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "option")
        .collect();

    if let Some(case_type) = case_type {
        let wanted = case_type.to_lowercase();
        if let Some(option) = options
            .iter()
            .find(|option| element_text(option).to_lowercase().contains(&wanted))
        {
            trace!("Matched case type option '{}'", element_text(option));
            return Some(option_value(option));
        }
    }

    options
        .iter()
        .find(|option| option.value().attr("selected").is_some())
        .or_else(|| options.first())
        .map(option_value)
}

fn button_label(element: &ElementRef<'_>) -> String {
    element
        .value()
        .attr("value")
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| element_text(element))
        .to_lowercase()
}

fn input_type(element: &ElementRef<'_>) -> String {
    element.value().attr("type").unwrap_or("text").to_lowercase()
}

fn is_submit_control(element: &ElementRef<'_>) -> bool {
    match element.value().name() {
        "button" => true,
        "input" => matches!(input_type(element).as_str(), "submit" | "button"),
        _ => false,
    }
}

fn matches_submit_keyword(element: &ElementRef<'_>) -> bool {
    let label = button_label(element);
    SUBMIT_KEYWORDS.iter().any(|keyword| label.contains(keyword))
}

fn has_case_field(form: &ElementRef<'_>) -> bool {
    form.descendants().filter_map(ElementRef::wrap).any(|element| {
        let fillable = match element.value().name() {
            "input" => TEXT_INPUT_TYPES.contains(&input_type(&element).as_str()),
            "select" => true,
            _ => false,
        };
        fillable && classify(&element).is_some()
    })
}

fn has_submit_keyword(form: &ElementRef<'_>) -> bool {
    form.descendants()
        .filter_map(ElementRef::wrap)
        .any(|element| is_submit_control(&element) && matches_submit_keyword(&element))
}

/// The case search form: one holding a case field, else one with a search
/// button, else the first form on the page.
fn pick_search_form<'a>(forms: &[ElementRef<'a>]) -> Option<ElementRef<'a>> {
    forms
        .iter()
        .find(|form| has_case_field(form))
        .or_else(|| forms.iter().find(|form| has_submit_keyword(form)))
        .or_else(|| forms.first())
        .copied()
}

/// Fills the case search form on `page_html` with `query`.
///
/// Returns `None` when the page has no form at all.
pub fn fill_search_form(
    page_html: &str,
    page_url: &Url,
    query: &CaseQuery,
) -> CaseResult<Option<FormSubmission>> {
    let document = Html::parse_document(page_html);
    let form_selector = Selector::parse("form").expect("static selector");
    let forms: Vec<ElementRef<'_>> = document.select(&form_selector).collect();
    let Some(form) = pick_search_form(&forms) else {
        return Ok(None);
    };
    trace!("Picked the search form out of {} on the page", forms.len());

    let action = match form.value().attr("action").map(str::trim) {
        Some(action) if !action.is_empty() => page_url.join(action)?,
        _ => page_url.clone(),
    };
    let method = match form.value().attr("method") {
        Some(method) if method.eq_ignore_ascii_case("post") => FormMethod::Post,
        _ => FormMethod::Get,
    };

    let mut fields = Vec::new();
    let mut buttons: Vec<ElementRef<'_>> = Vec::new();
    let mut input_buttons: Vec<ElementRef<'_>> = Vec::new();

    for element in form.descendants().filter_map(ElementRef::wrap) {
        let name = element.value().attr("name").unwrap_or_default();
        match element.value().name() {
            "input" => {
                let input_type = input_type(&element);
                if input_type == "submit" || input_type == "button" {
                    input_buttons.push(element);
                    continue;
                }
                if name.is_empty() {
                    continue;
                }
                let existing = element.value().attr("value").unwrap_or_default().to_string();
                let value = if TEXT_INPUT_TYPES.contains(&input_type.as_str()) {
                    match classify(&element) {
                        Some(CaseField::Type) => query.case_type.clone(),
                        Some(CaseField::Number) => query.case_number.clone(),
                        Some(CaseField::Year) => query.case_year.clone(),
                        None => existing,
                    }
                } else if input_type == "checkbox" || input_type == "radio" {
                    if element.value().attr("checked").is_none() {
                        continue;
                    }
                    if existing.is_empty() {
                        "on".to_string()
                    } else {
                        existing
                    }
                } else if input_type == "image" || input_type == "reset" || input_type == "file" {
                    continue;
                } else {
                    existing
                };
                fields.push((name.to_string(), value));
            }
            "select" if !name.is_empty() => {
                let case_type = (classify(&element) == Some(CaseField::Type))
                    .then_some(query.case_type.as_str());
                if let Some(value) = select_value(&element, case_type) {
                    fields.push((name.to_string(), value));
                }
            }
            "textarea" if !name.is_empty() => {
                fields.push((name.to_string(), element.text().collect()));
            }
            "button" => buttons.push(element),
            _ => {}
        }
    }

    buttons.extend(input_buttons);
    let submit = buttons.iter().find(|button| matches_submit_keyword(button));
    match submit {
        Some(button) => {
            if let Some(name) = button.value().attr("name").filter(|n| !n.is_empty()) {
                let value = button
                    .value()
                    .attr("value")
                    .map(str::to_string)
                    .unwrap_or_else(|| element_text(button));
                fields.push((name.to_string(), value));
            }
        }
        None => debug!("No submit control matched, sending the form without one"),
    }

    debug!(
        "Prepared {:?} submission to {} with {} fields",
        method,
        action,
        fields.len()
    );
    Ok(Some(FormSubmission {
        method,
        action,
        fields,
    }))
}
