use scraper::ElementRef;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;
use tode_core::{TextInput, Toggle, ValueField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// `input` of any non-checkable type (text, search, hidden, ...).
    Input,
    Checkbox,
    Radio,
    Select { options: Vec<String> },
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub name: Option<String>,
    pub kind: ControlKind,
    pub value: String,
    pub checked: bool,
}

impl Control {
    /// Builds the control state for `input`, `select` and `textarea`
    /// elements. Anything else is not a form control.
    pub fn from_element(el: ElementRef<'_>) -> Option<Self> {
        let element = el.value();
        let name = element.attr("name").map(str::to_string);
        let attr_value = element.attr("value").map(str::to_string);

        let control = match element.name() {
            "input" => {
                let ty = element.attr("type").unwrap_or("text").to_ascii_lowercase();
                let kind = match ty.as_str() {
                    "checkbox" => ControlKind::Checkbox,
                    "radio" => ControlKind::Radio,
                    _ => ControlKind::Input,
                };
                let value = match kind {
                    ControlKind::Checkbox | ControlKind::Radio => {
                        attr_value.unwrap_or_else(|| "on".to_string())
                    }
                    _ => attr_value.unwrap_or_default(),
                };
                Control {
                    name,
                    kind,
                    value,
                    checked: element.attr("checked").is_some(),
                }
            }
            "select" => {
                let mut options = Vec::new();
                let mut selected = None;
                for opt in el
                    .descendants()
                    .filter_map(ElementRef::wrap)
                    .filter(|e| e.value().name() == "option")
                {
                    let value = opt
                        .value()
                        .attr("value")
                        .map(str::to_string)
                        .unwrap_or_else(|| opt.text().collect::<String>().trim().to_string());
                    if selected.is_none() && opt.value().attr("selected").is_some() {
                        selected = Some(options.len());
                    }
                    options.push(value);
                }
                let value = options
                    .get(selected.unwrap_or(0))
                    .cloned()
                    .unwrap_or_default();
                Control {
                    name,
                    kind: ControlKind::Select { options },
                    value,
                    checked: false,
                }
            }
            "textarea" => Control {
                name,
                kind: ControlKind::TextArea,
                value: el.text().collect(),
                checked: false,
            },
            _ => return None,
        };
        Some(control)
    }

    pub fn is_checkable(&self) -> bool {
        matches!(self.kind, ControlKind::Checkbox | ControlKind::Radio)
    }

    /// A select only takes values it has an option for; otherwise no
    /// option is selected and its value reads empty.
    pub fn set_value(&mut self, value: &str) {
        self.value = match &self.kind {
            ControlKind::Select { options } if !options.iter().any(|o| o == value) => {
                String::new()
            }
            _ => value.to_string(),
        };
    }

    pub fn to_json(&self) -> Value {
        if self.is_checkable() {
            json!({ "value": self.value, "checked": self.checked })
        } else {
            json!({ "value": self.value })
        }
    }
}

/// Shared handle to one control of a [`Document`](crate::Document).
///
/// Clones observe and mutate the same control.
#[derive(Debug, Clone)]
pub struct ControlRef(Rc<RefCell<Control>>);

impl ControlRef {
    pub(crate) fn new(control: Control) -> Self {
        Self(Rc::new(RefCell::new(control)))
    }

    pub fn name(&self) -> Option<String> {
        self.0.borrow().name.clone()
    }

    pub fn kind(&self) -> ControlKind {
        self.0.borrow().kind.clone()
    }

    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().set_value(value);
    }

    /// `false` for anything that is not a checkbox or radio button.
    pub fn is_checked(&self) -> bool {
        let control = self.0.borrow();
        control.is_checkable() && control.checked
    }

    pub fn set_checked(&self, checked: bool) {
        self.0.borrow_mut().checked = checked;
    }

    pub fn snapshot(&self) -> Control {
        self.0.borrow().clone()
    }

    pub fn same_control(&self, other: &ControlRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl TextInput for ControlRef {
    fn value(&self) -> String {
        ControlRef::value(self)
    }

    fn set_value(&self, value: &str) {
        ControlRef::set_value(self, value)
    }
}

impl Toggle for ControlRef {
    fn is_checked(&self) -> bool {
        ControlRef::is_checked(self)
    }
}

impl ValueField for ControlRef {
    fn set_value(&self, value: &str) {
        ControlRef::set_value(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn control(html: &str) -> Control {
        let doc = Html::parse_document(html);
        let sel = Selector::parse("input, select, textarea").unwrap();
        let el = doc.select(&sel).next().unwrap();
        Control::from_element(el).unwrap()
    }

    #[test]
    fn checkbox_defaults_to_on() {
        let c = control(r#"<input type="CHECKBOX" name="regex" checked>"#);
        assert_eq!(c.kind, ControlKind::Checkbox);
        assert_eq!(c.value, "on");
        assert!(c.checked);
    }

    #[test]
    fn select_value_is_selected_option_or_first() {
        let c = control(
            r#"<select name="t"><option>normal</option><option value="regex" selected>Regex</option></select>"#,
        );
        assert_eq!(c.value, "regex");

        let c = control(r#"<select name="t"><option> normal </option><option>exact</option></select>"#);
        assert_eq!(c.value, "normal");
    }

    #[test]
    fn select_rejects_unknown_values() {
        let mut c = control(r#"<select name="t"><option>normal</option><option>regex</option></select>"#);
        c.set_value("regex");
        assert_eq!(c.value, "regex");
        c.set_value("fuzzy");
        assert_eq!(c.value, "");
    }

    #[test]
    fn text_input_is_never_checked() {
        let handle = ControlRef::new(control(r#"<input name="regex" checked>"#));
        assert!(!handle.is_checked());
        handle.set_checked(true);
        assert!(!handle.is_checked());
    }

    #[test]
    fn clones_share_state() {
        let a = ControlRef::new(control(r#"<textarea name="q">hi</textarea>"#));
        let b = a.clone();
        b.set_value("F = ma");
        assert_eq!(a.value(), "F = ma");
        assert!(a.same_control(&b));
    }
}
