use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ARTICLE: Regex =
        Regex::new(r"^(?:a|an)(?:\s+(.*))?$").expect("Expect a valid article regex");
    static ref REFERRED: Regex = Regex::new(r"(?:half|quarter)\s+(?:an|a|the)?\s*([a-zA-Z\-]+)")
        .expect("Expect a valid fraction reference regex");
}

/// Normalize an extracted (name, quantity) pair.
///
/// A leading article becomes `1` (`"a slice"` -> `"1 slice"`) and the fraction
/// words `half`/`quarter` become `1/2`/`1/4`, carrying along the word they
/// refer to (`"half an avocado"` -> `"1/2 avocado"`). When the name names a
/// toast of the referred word, the referred word takes over as the name and
/// the quantity is the bare fraction.
pub fn normalize(name: &str, quantity: &str) -> (String, String) {
    let mut name = name.trim().to_owned();
    let mut qty = quantity.trim().to_owned();
    let mut lqty = qty.to_lowercase();

    if let Some(rest) = ARTICLE
        .captures(&lqty)
        .map(|caps| caps.get(1).map(|m| m.as_str().to_owned()))
    {
        qty = match rest {
            Some(rest) => format!("1 {rest}"),
            None => "1".into(),
        };
        lqty = qty.clone();
    }

    if lqty.contains("half") || lqty.contains("quarter") {
        let frac = if lqty.contains("half") { "1/2" } else { "1/4" };

        let referred = REFERRED
            .captures(&lqty)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_owned());
        match referred {
            Some(referred) => {
                let lname = name.to_lowercase();
                if lname.contains("toast") && lname.contains(&referred) {
                    name = referred;
                    qty = frac.into();
                } else {
                    qty = format!("{frac} {referred}");
                }
            }
            None => qty = frac.into(),
        }
    }

    (name.trim().to_owned(), qty.trim().to_owned())
}
