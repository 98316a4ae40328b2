use crate::errors::AppResult;
use crate::reader::serial::list_ports;
use crate::ui::messages::{header, warning};
use crate::utils::table::Table;

pub fn handle() -> AppResult<()> {
    let ports = list_ports()?;

    if ports.is_empty() {
        warning("No serial ports found");
        println!("  1. Check that the reader board is plugged in");
        println!("  2. On Linux, add your user to the 'dialout' group");
        return Ok(());
    }

    header("Available serial ports");
    let mut table = Table::new(&["Port", "Type", "Product"]);
    for p in ports {
        table.add_row(vec![p.path, p.kind.to_string(), p.product.unwrap_or_default()]);
    }
    print!("{}", table.render());
    println!("\nUse: rattendance --port <PORT> run");
    Ok(())
}
