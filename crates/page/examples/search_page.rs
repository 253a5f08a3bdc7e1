use tode_core::SearchType;
use tode_page::{Document, PageConfig};
use tode_picker::SeededRandom;

const PAGE: &str = r#"
<form id="search">
  <input type="hidden" name="search-type" value="regex">
  <input type="checkbox" name="regex">
</form>
<input id="search-field" type="search">
"#;

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => PageConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => PageConfig::default(),
    };

    let doc = Document::parse_with_config(PAGE, config)?;
    let mut picker = doc.mount(SeededRandom::from_entropy())?;
    println!("after mount: {}", doc.snapshot());

    let search_type: SearchType = doc
        .form_field(&doc.config().search_type_field)?
        .value()
        .parse()?;
    println!("search type: {search_type} (query op {:?})", search_type.op());

    for _ in 0..3 {
        println!("example: {}", picker.pick());
    }

    doc.form_field(&doc.config().regex_field)?.set_checked(true);
    for _ in 0..3 {
        println!("regex example: {}", picker.pick());
    }

    println!("final: {:#}", doc.snapshot());
    Ok(())
}
