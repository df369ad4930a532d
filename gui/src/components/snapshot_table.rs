// Recent market snapshot: the dataset preview as a table.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::PreviewTable;
use shared::utils::format_decimal;

#[component]
pub fn SnapshotTable(table: PreviewTable) -> Element {
    rsx! {
        div {
            class: "card",
            table {
                thead {
                    tr {
                        for column in table.columns.iter() {
                            th { "{column}" }
                        }
                    }
                }
                tbody {
                    for row in table.rows.iter() {
                        tr {
                            for value in row.iter() {
                                td { {format_decimal(*value, 2)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
