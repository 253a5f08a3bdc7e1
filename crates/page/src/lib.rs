//! In-memory model of the search page.
//!
//! A [`Document`] is parsed once from markup. Lookups by id and field name
//! hand out [`ControlRef`] handles, which the picker mutates in place.

pub mod config;
pub mod control;

pub use config::PageConfig;
pub use control::{Control, ControlKind, ControlRef};

use scraper::{ElementRef, Html, Selector};
use serde_json::{Map, Value, json};
use tode_core::{PageError, RandomSource};
use tode_picker::{ExamplePicker, init_search_type};
use tracing::debug;

/// Picker wired to a parsed page.
pub type PagePicker<R> = ExamplePicker<ControlRef, ControlRef, R>;

#[derive(Debug)]
struct Form {
    id: String,
    controls: Vec<ControlRef>,
}

#[derive(Debug)]
pub struct Document {
    config: PageConfig,
    search_input: Option<ControlRef>,
    form: Option<Form>,
}

fn id_selector(tag: &str, id: &str) -> Result<Selector, PageError> {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    Selector::parse(&format!(r#"{tag}[id="{escaped}"]"#))
        .map_err(|e| PageError::Selector(e.to_string()))
}

impl Document {
    pub fn parse(html: &str) -> Result<Self, PageError> {
        Self::parse_with_config(html, PageConfig::default())
    }

    /// Elements that are missing are not an error here; they surface from
    /// the lookups that need them.
    pub fn parse_with_config(html: &str, config: PageConfig) -> Result<Self, PageError> {
        let html = Html::parse_document(html);

        // First form with the id wins, as with querySelector.
        let form_el = html.select(&id_selector("form", &config.form_id)?).next();
        let input_el = html
            .select(&id_selector("", &config.search_input_id)?)
            .next();

        let mut shared = None;
        let form = form_el.map(|form_el| {
            let controls = form_el
                .descendants()
                .filter_map(ElementRef::wrap)
                .filter_map(|el| {
                    let control = ControlRef::new(Control::from_element(el)?);
                    if input_el.is_some_and(|input| input == el) {
                        shared = Some(control.clone());
                    }
                    Some(control)
                })
                .collect::<Vec<_>>();
            Form {
                id: config.form_id.clone(),
                controls,
            }
        });

        // The search input may itself live inside the form; keep one handle.
        let search_input = shared.or_else(|| {
            input_el
                .and_then(Control::from_element)
                .map(ControlRef::new)
        });

        debug!(
            form = form.is_some(),
            controls = form.as_ref().map_or(0, |f| f.controls.len()),
            search_input = search_input.is_some(),
            "parsed search page"
        );

        Ok(Self {
            config,
            search_input,
            form,
        })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// The search form's control named `name`.
    pub fn form_field(&self, name: &str) -> Result<ControlRef, PageError> {
        let form = self.form.as_ref().ok_or_else(|| PageError::FormNotFound {
            form_id: self.config.form_id.clone(),
        })?;
        form.controls
            .iter()
            .find(|c| c.name().as_deref() == Some(name))
            .cloned()
            .ok_or_else(|| PageError::field_not_found(&form.id, name))
    }

    pub fn search_input(&self) -> Result<ControlRef, PageError> {
        self.search_input
            .clone()
            .ok_or_else(|| PageError::element_not_found(format!("#{}", self.config.search_input_id)))
    }

    /// Composes the page: resets the search type, then wires a picker to
    /// the search input and the regex checkbox.
    pub fn mount<R: RandomSource>(&self, rng: R) -> Result<PagePicker<R>, PageError> {
        let search_type = self.form_field(&self.config.search_type_field)?;
        init_search_type(&search_type);

        let input = self.search_input()?;
        let regex = self.form_field(&self.config.regex_field)?;
        debug!(form = %self.config.form_id, "mounted example picker");

        Ok(ExamplePicker::new(input, regex, rng))
    }

    /// Current values of the search input and every named form control.
    pub fn snapshot(&self) -> Value {
        let form = self.form.as_ref().map(|form| {
            let mut fields = Map::new();
            for control in &form.controls {
                let control = control.snapshot();
                if let Some(name) = &control.name {
                    fields.entry(name.clone()).or_insert_with(|| control.to_json());
                }
            }
            Value::Object(fields)
        });

        json!({
            "search_input": self.search_input.as_ref().map(ControlRef::value),
            "form": form,
        })
    }
}
