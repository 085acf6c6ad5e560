use std::io::Cursor;
use word_analyser::{generate_word_map, rank_words, summarize, StopwordFilter};

fn main() {
    env_logger::init();

    let text = "The quick brown fox jumps over the lazy dog.\nThe dog sleeps, the fox runs.";
    let stopwords = StopwordFilter::from_words(["the", "over"]);

    let frequency_map = generate_word_map(Cursor::new(text), &stopwords).unwrap();
    let ranked_list = rank_words(&frequency_map);

    println!("Word frequencies for the given text \"{}\"", text);
    for (word, frequency) in &ranked_list {
        println!("{}: {}", word, frequency);
    }

    println!();
    println!(
        "{}",
        summarize(&ranked_list, "<inline text>", "<stdout>", true).unwrap()
    );
}
