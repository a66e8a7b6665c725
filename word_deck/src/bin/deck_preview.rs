use std::path::PathBuf;

use clap::Parser;
use word_deck::{Selection, WordLoader};

/// Load a word selection the way the quiz server does and print it.
#[derive(Parser, Debug)]
#[command(name = "deck_preview", version, about)]
struct Args {
    /// Directory holding the vocabulary CSV sets
    #[arg(short, long, default_value = "GRE")]
    dir: PathBuf,

    /// `ALL` or a comma separated list of set files
    #[arg(default_value = "ALL")]
    files: String,

    /// Only list the available sets
    #[arg(short, long)]
    list: bool,
}

fn main() {
    let args = Args::parse();
    let loader = WordLoader::new(&args.dir);

    if args.list {
        for name in loader.list_sources() {
            println!("{name}");
        }
        return;
    }

    let selection = Selection::parse(&args.files);
    let words = loader.load(&selection);

    println!("Sets: {}", args.dir.display());
    println!("Selection: {}", args.files);
    println!("Loaded {} words", words.len());
    println!("---");
    for entry in words {
        println!("{}\t{}", entry.word, entry.meaning);
    }
}
