#[cfg(test)]
mod tests {
    use crate::api::iex::{TICKERS_PER_REQUEST, chunk_tickers};

    fn tickers(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("T{:04}", i)).collect()
    }

    #[test]
    fn splits_at_the_provider_cap() {
        let list = tickers(250);
        let chunks = chunk_tickers(&list, TICKERS_PER_REQUEST);

        let sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![100, 100, 50]);
    }

    #[test]
    fn covers_every_ticker_exactly_once() {
        let list = tickers(250);
        let chunks = chunk_tickers(&list, TICKERS_PER_REQUEST);

        let rejoined: Vec<String> = chunks.concat();
        assert_eq!(rejoined, list);
    }

    #[test]
    fn issues_ceil_n_over_c_chunks() {
        for (n, cap, expected) in [(1, 100, 1), (100, 100, 1), (101, 100, 2), (5, 2, 3)] {
            let list = tickers(n);
            assert_eq!(chunk_tickers(&list, cap).len(), expected, "n={} cap={}", n, cap);
        }
    }

    #[test]
    fn short_request_stays_in_one_chunk() {
        let list = tickers(2);
        let chunks = chunk_tickers(&list, TICKERS_PER_REQUEST);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], &list[..]);
    }
}
