use std::io::{self, BufRead};

/// Splits a line stream into update bursts. A blank line ends a burst;
/// runs of blank lines never produce empty bursts.
pub struct Bursts<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> Bursts<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Bursts<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut burst = String::new();
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    self.done = true;
                    return (!burst.is_empty()).then_some(Ok(burst));
                }
                Ok(_) if line.trim().is_empty() => {
                    if !burst.is_empty() {
                        return Some(Ok(burst));
                    }
                }
                Ok(_) => burst.push_str(&line),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
