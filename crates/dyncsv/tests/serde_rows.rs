#![cfg(feature = "serde")]
use serde_json::json;

use dyncsv::{Header, Row, Table};

#[test]
fn row_serializes_as_object() -> Result<(), Box<dyn std::error::Error>> {
    let row = Row::new("1,Ana", Header::new(["id", "name"]))?;
    let v = serde_json::to_value(&row)?;
    assert_eq!(v, json!({"id": "1", "name": "Ana"}));
    Ok(())
}

#[test]
fn row_serializes_in_header_order() -> Result<(), Box<dyn std::error::Error>> {
    let row = Row::new("3,2,1", Header::new(["c", "b", "a"]))?;
    assert_eq!(serde_json::to_string(&row)?, r#"{"c":"3","b":"2","a":"1"}"#);
    Ok(())
}

#[test]
fn table_serializes_as_array() -> Result<(), Box<dyn std::error::Error>> {
    let table = Table::parse("k,v\na,1\n\nb,2\n")?;
    let v = serde_json::to_value(&table)?;
    assert_eq!(v, json!([{"k": "a", "v": "1"}, {"k": "b", "v": "2"}]));
    Ok(())
}

#[test]
fn header_and_entry() -> Result<(), Box<dyn std::error::Error>> {
    let table = Table::parse("k,v\na,1\n")?;
    assert_eq!(serde_json::to_value(table.header())?, json!(["k", "v"]));
    let entry = table.rows()[0].entries().next().unwrap();
    assert_eq!(serde_json::to_value(entry)?, json!({"header": "k", "value": "a"}));
    Ok(())
}

#[test]
fn duplicate_header_names_are_all_emitted() -> Result<(), Box<dyn std::error::Error>> {
    let row = Row::new("first,mid,last", Header::new(["k", "m", "k"]))?;
    assert_eq!(
        serde_json::to_string(&row)?,
        r#"{"k":"first","m":"mid","k":"last"}"#
    );
    Ok(())
}
