use flagmap::ArgumentTable;

fn main() {
    let table = ArgumentTable::from_env();

    println!("flags: {table}");
    println!("verbose: {}", table.get_bool("-verbose", false));
    println!("listen: {}", table.get_bool("-listen", true));
    println!("threads: {}", table.get_int("-threads", 1));
    println!("datadir: {}", table.get_str("-datadir", "~/.flagmap"));
}
