//! Use `sha1-engine` to hash the contents of files (or stdin) and print each
//! digest as lowercase hex, `sha1sum`-style.

use std::io::{self, Read};
use std::{env, fs, process};

use sha1_engine::sha1;

fn digest_reader<R: Read>(mut reader: R) -> io::Result<sha1::Hash> {
    let mut engine = sha1::Hash::engine();
    io::copy(&mut reader, &mut engine)?;
    sha1::Hash::from_engine(engine)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

fn main() {
    let paths: Vec<String> = env::args().skip(1).collect();

    if paths.is_empty() {
        match digest_reader(io::stdin().lock()) {
            Ok(hash) => println!("{}  -", hash),
            Err(e) => {
                eprintln!("sha1sum: stdin: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let mut failed = false;
    for path in paths {
        match fs::File::open(&path).and_then(digest_reader) {
            Ok(hash) => println!("{}  {}", hash, path),
            Err(e) => {
                eprintln!("sha1sum: {}: {}", path, e);
                failed = true;
            }
        }
    }
    if failed {
        process::exit(1);
    }
}
