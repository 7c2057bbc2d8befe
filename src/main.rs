use std::{env, fs::read_to_string, process::exit, time::Instant};

use javalex::{errors::errors::Error, lexer::lexer::tokenize};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: javalex <file>");
        exit(1);
    }

    let file_path = &args[1];
    let source = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();

    match tokenize(source) {
        Ok(tokens) => {
            for token in tokens.iter() {
                if !token.kind.is_whitespace() {
                    println!("{}", token);
                }
            }

            println!("{} tokens", tokens.len());
            println!("Tokenized in {:?}", start.elapsed());
        }
        Err(error) => {
            display_error(&error, file_path);
            exit(1);
        }
    }
}

fn display_error(error: &Error, file: &str) {
    /*
        Error: MissingCloseBracket
        -> DiceGame.java
        missing close bracket for "{"! line 12:
        public int roll(int seed) {
    */

    println!("Error: {}", error.get_error_name());
    println!("-> {}", file);
    println!("{}", error);
}
