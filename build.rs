use std::env;

#[path = "src/board_select.rs"]
mod board_select;

use board_select::BOARDS;

fn main() {
    let values = BOARDS
        .iter()
        .map(|b| format!("\"{b}\""))
        .collect::<Vec<_>>()
        .join(", ");
    println!("cargo::rustc-check-cfg=cfg(board, values({values}))");

    let enabled = |b: &str| {
        let var = format!("CARGO_FEATURE_{}", b.to_uppercase());
        env::var_os(var).is_some()
    };

    match board_select::select(enabled) {
        Ok(None) => (),
        Ok(Some(board)) => println!("cargo::rustc-cfg=board=\"{board}\""),
        Err(selected) => panic!(
            "teensyid: only one board feature may be enabled, got {selected:?}"
        ),
    }

    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed=src/board_select.rs");
}
