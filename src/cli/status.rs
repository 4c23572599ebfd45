use crate::error::Result;
use crate::settings::get_data_dir;
use crate::store::Store;

pub fn run() -> Result<()> {
    let data_dir = get_data_dir();
    let store = Store::open(&data_dir);

    println!("Data dir:      {}", data_dir.display());
    println!("Store file:    {}", store.transactions_path().display());

    if store.transactions_path().exists() {
        match store.read_transactions() {
            Ok(records) => println!("Transactions:  {}", records.len()),
            Err(e) => println!("Transactions:  unreadable ({e})"),
        }
    } else {
        println!();
        println!("Store not found. Run `resumo init` to set up.");
    }

    Ok(())
}
