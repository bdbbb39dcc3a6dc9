use company_matcher::{load_reference, match_company_name, CompanyRecord};

fn main() {
    env_logger::init();

    let reference_index = load_reference(vec![
        CompanyRecord::new("Target Corporation", Some("TGT")),
        CompanyRecord::new("Alphabet Inc.", Some("GOOGL")),
        CompanyRecord::new("Alphabet Inc.", Some("GOOG")),
        CompanyRecord::new("Berkshire Hathaway Inc.", Some("BRK-B")),
    ]);

    for query in ["Target Corporation", "targt corp", "Alphabet", "Hathaway Berkshire"] {
        let result = match_company_name(query, &reference_index);

        println!("Matching \"{}\"", query);
        println!("{}", result);
        println!();
    }
}
