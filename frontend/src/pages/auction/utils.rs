use crate::{api::Auction, utils::format::format_amount};

/// Parses a bid typed by the user (`15000`, `15,000`, `15 000`) and checks it
/// against the auction: above the current bid when there is one, otherwise at
/// least the starting bid.
pub fn validate_bid(raw: &str, auction: &Auction) -> Result<f64, String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return Err("Enter a bid amount".into());
    }
    let amount = cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| "Bid amount must be a positive number".to_string())?;
    match auction.current_bid.filter(|v| *v > 0.0) {
        Some(current) if amount <= current => Err(format!(
            "Bid must be higher than the current bid of {}",
            format_amount(current)
        )),
        Some(_) => Ok(amount),
        None => match auction.starting_bid {
            Some(starting) if amount < starting => Err(format!(
                "Bid must be at least the starting bid of {}",
                format_amount(starting)
            )),
            _ => Ok(amount),
        },
    }
}

pub fn is_open(auction: &Auction) -> bool {
    auction.status_label().eq_ignore_ascii_case("active")
}
