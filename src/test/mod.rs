mod chunking;
mod formatting;
