//! Static seed records. Constructors return fresh owned values per call so
//! no mutable seed state outlives the load that consumes it.

use crate::records::{Bill, BillStatus, Chamber, Legislator, LobbyingFiling, SpendingAward};

pub fn legislators() -> Vec<Legislator> {
    vec![
        legislator("P000197", "Maria", "Pellegrini", "D", "CA", Chamber::Lower, Some("12"), true, "202-225-4965"),
        legislator("C000880", "Daniel", "Crowley", "R", "ID", Chamber::Upper, None, true, "202-224-2752"),
        legislator("W000817", "Elena", "Warrick", "D", "MA", Chamber::Upper, None, true, "202-224-4543"),
        legislator("G000592", "Jared", "Gulden", "D", "ME", Chamber::Lower, Some("2"), true, "202-225-6306"),
        legislator("B001230", "Tamara", "Baldry", "D", "WI", Chamber::Upper, None, false, "202-224-5653"),
        legislator("H001046", "Martin", "Heinemann", "D", "NM", Chamber::Upper, None, true, "202-224-5521"),
        legislator("S001191", "Kyra", "Sandoval", "D", "AZ", Chamber::Independent, None, false, "202-224-4521"),
        legislator("M001183", "Joseph", "Mancuso", "D", "WV", Chamber::Upper, None, false, "202-224-3954"),
        legislator("R000615", "Colin", "Reyes", "R", "TX", Chamber::Lower, Some("23"), true, "202-225-4511"),
        legislator("O000172", "Alexandra", "Ocampo", "D", "NY", Chamber::Lower, Some("14"), true, "202-225-3965"),
        legislator("F000466", "Brett", "Fallon", "R", "PA", Chamber::Lower, Some("1"), true, "202-225-4276"),
        legislator("K000393", "Vin", "Khanna", "D", "CA", Chamber::Lower, Some("17"), true, "202-225-2631"),
    ]
}

pub fn bills() -> Vec<Bill> {
    vec![
        bill("hr1048-119", 119, "hr", 1048, "Small Business Tax Relief and Simplification Act", BillStatus::InCommittee, "2025-02-14", Some("P000197")),
        bill("hr2611-119", 119, "hr", 2611, "Rural Broadband Expansion Act", BillStatus::PassedHouse, "2025-04-02", Some("G000592")),
        bill("s0412-119", 119, "s", 412, "Veterans Health Modernization Act", BillStatus::Introduced, "2025-01-28", Some("H001046")),
        bill("s0899-119", 119, "s", 899, "Clean Water Infrastructure Investment Act", BillStatus::PassedSenate, "2025-03-11", Some("W000817")),
        bill("hjres0021-119", 119, "hjres", 21, "Providing for congressional disapproval of certain energy rules", BillStatus::Introduced, "2025-02-03", Some("R000615")),
        bill("hr4350-118", 118, "hr", 4350, "National Defense Authorization Act for Fiscal Year 2024", BillStatus::Enacted, "2023-06-30", None),
        bill("hr3076-118", 118, "hr", 3076, "Postal Service Reform Act", BillStatus::Enacted, "2023-05-11", Some("F000466")),
        bill("s2226-118", 118, "s", 2226, "Border Security Technology Improvement Act", BillStatus::Vetoed, "2023-07-19", Some("C000880")),
        bill("hr5893-118", 118, "hr", 5893, "Student Loan Interest Deduction Expansion Act", BillStatus::InCommittee, "2023-10-04", Some("O000172")),
        bill("s1329-119", 119, "s", 1329, "Semiconductor Supply Chain Security Act", BillStatus::InCommittee, "2025-05-22", Some("K000393")),
    ]
}

pub fn spending_awards() -> Vec<SpendingAward> {
    vec![
        award("CONT-AWD-2024-0193", "Meridian Defense Systems LLC", 48_500_000.0, "contract", "Department of Defense", "Tactical communications modernization, phase II", 2024),
        award("CONT-AWD-2024-0311", "Helios Orbital Inc", 21_750_000.0, "contract", "National Aeronautics and Space Administration", "Lunar lander propulsion subsystem development", 2024),
        award("GRNT-AWD-2024-1102", "Prairie State University", 3_200_000.0, "grant", "National Science Foundation", "Graduate research fellowships in quantum materials", 2024),
        award("GRNT-AWD-2024-1288", "Bayview Community Health Network", 1_875_000.0, "grant", "Department of Health and Human Services", "Rural telehealth access expansion program", 2024),
        award("CONT-AWD-2023-0054", "Cascadia Bridgeworks", 94_300_000.0, "contract", "Department of Transportation", "Interstate bridge seismic retrofit, segment 4", 2023),
        award("GRNT-AWD-2023-0871", "Sunstone Solar Cooperative", 5_600_000.0, "grant", "Department of Energy", "Community solar generation and storage pilot", 2023),
        award("CONT-AWD-2023-0419", "Atlantic Shipyard Partners", 310_000_000.0, "contract", "Department of the Navy", "Destroyer maintenance and overhaul, multi-year", 2023),
        award("GRNT-AWD-2024-1433", "Great Lakes Water Alliance", 12_400_000.0, "grant", "Environmental Protection Agency", "Drinking water lead service line replacement", 2024),
        award("CONT-AWD-2024-0590", "Redline Analytics Corp", 7_950_000.0, "contract", "Department of Homeland Security", "Border sensor data fusion platform", 2024),
        award("GRNT-AWD-2023-0922", "Appalachian Workforce Council", 2_150_000.0, "grant", "Department of Labor", "Apprenticeship pathways in advanced manufacturing", 2023),
    ]
}

pub fn lobbying_filings() -> Vec<LobbyingFiling> {
    vec![
        filing(
            "LD2-2025-Q1-8841", "TerraGrid Energy", "Utility-scale renewable energy developer",
            "Capitol Strategies Group", "101 Constitution Ave NW, Washington, DC",
            "Diane Okafor", "Partner", 420_000.0, 2025, "Q1", "quarterly",
            "ENERGY, TAXATION", "Production tax credit extension for storage projects",
            "House Ways and Means, Senate Finance", "", "2025-04-18",
        ),
        filing(
            "LD2-2025-Q1-9027", "Northwind Pharmaceuticals", "Specialty drug manufacturer",
            "Beacon Hill Advocacy LLC", "815 K St NW, Washington, DC",
            "Marcus Feld", "Senior Director", 380_000.0, 2025, "Q1", "quarterly",
            "HEALTH, PHARMACY", "Drug pricing negotiation implementation rules",
            "Department of Health and Human Services, Senate HELP", "", "2025-04-12",
        ),
        filing(
            "LD2-2024-Q4-7713", "Open Lakes Shipping Association", "Trade association of Great Lakes carriers",
            "Riverside Public Affairs", "400 N Capitol St NW, Washington, DC",
            "Susan Calloway", "Principal", 150_000.0, 2024, "Q4", "quarterly",
            "TRANSPORTATION, MARITIME", "Icebreaker fleet appropriations; Jones Act oversight",
            "House Transportation and Infrastructure, Coast Guard", "", "2025-01-21",
        ),
        filing(
            "LD2-2024-Q4-7950", "Quanta Semiconductor", "Fabless chip design firm",
            "Meridian Government Relations", "1201 Pennsylvania Ave NW, Washington, DC",
            "Alan Whitfield", "Managing Director", 610_000.0, 2024, "Q4", "quarterly",
            "TECHNOLOGY, TRADE", "Export control licensing for advanced node designs",
            "Department of Commerce, House Foreign Affairs", "Taiwan Business Council", "2025-01-17",
        ),
        filing(
            "LD2-2024-Q3-6104", "American Grain Cooperative", "Farmer-owned grain marketing cooperative",
            "Heartland Advocates Inc", "600 Maryland Ave SW, Washington, DC",
            "Patricia Lund", "Vice President", 95_000.0, 2024, "Q3", "quarterly",
            "AGRICULTURE", "Farm bill commodity title reauthorization",
            "House Agriculture, Senate Agriculture", "", "2024-10-19",
        ),
        filing(
            "LD2-2024-Q3-6552", "Vantage Data Centers Coalition", "Hyperscale data center operators",
            "Capitol Strategies Group", "101 Constitution Ave NW, Washington, DC",
            "Diane Okafor", "Partner", 275_000.0, 2024, "Q3", "quarterly",
            "ENERGY, TECHNOLOGY", "Grid interconnection queue reform for large loads",
            "Federal Energy Regulatory Commission, Senate Energy", "", "2024-10-15",
        ),
        filing(
            "LD2-2024-Q2-5218", "Harbor Point Financial", "Regional bank holding company",
            "Beacon Hill Advocacy LLC", "815 K St NW, Washington, DC",
            "Marcus Feld", "Senior Director", 180_000.0, 2024, "Q2", "quarterly",
            "BANKING, FINANCIAL SERVICES", "Community bank capital requirement tailoring",
            "Federal Reserve, House Financial Services", "", "2024-07-20",
        ),
        filing(
            "LD2-2024-Q2-5677", "Skyward Unmanned Systems", "Commercial drone manufacturer",
            "Riverside Public Affairs", "400 N Capitol St NW, Washington, DC",
            "Susan Calloway", "Principal", 130_000.0, 2024, "Q2", "quarterly",
            "AVIATION, DEFENSE", "Beyond-visual-line-of-sight rulemaking timeline",
            "Federal Aviation Administration, Senate Commerce", "", "2024-07-17",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn legislator(
    bioguide_id: &str,
    first_name: &str,
    last_name: &str,
    party: &str,
    state: &str,
    chamber: Chamber,
    district: Option<&str>,
    in_office: bool,
    phone: &str,
) -> Legislator {
    Legislator {
        bioguide_id: bioguide_id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        party: party.to_string(),
        state: state.to_string(),
        chamber,
        district: district.map(str::to_string),
        in_office,
        phone: phone.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn bill(
    bill_id: &str,
    congress: i64,
    bill_type: &str,
    number: i64,
    title: &str,
    status: BillStatus,
    introduced_date: &str,
    sponsor_id: Option<&str>,
) -> Bill {
    Bill {
        bill_id: bill_id.to_string(),
        congress,
        bill_type: bill_type.to_string(),
        number,
        title: title.to_string(),
        status,
        introduced_date: introduced_date.to_string(),
        sponsor_id: sponsor_id.map(str::to_string),
    }
}

#[allow(clippy::too_many_arguments)]
fn award(
    award_id: &str,
    recipient_name: &str,
    award_amount: f64,
    award_type: &str,
    awarding_agency: &str,
    description: &str,
    fiscal_year: i64,
) -> SpendingAward {
    SpendingAward {
        award_id: award_id.to_string(),
        recipient_name: recipient_name.to_string(),
        award_amount,
        award_type: award_type.to_string(),
        awarding_agency: awarding_agency.to_string(),
        description: description.to_string(),
        fiscal_year,
    }
}

#[allow(clippy::too_many_arguments)]
fn filing(
    filing_id: &str,
    client_name: &str,
    client_description: &str,
    registrant_name: &str,
    registrant_address: &str,
    lobbyist_name: &str,
    lobbyist_title: &str,
    amount: f64,
    year: i64,
    quarter: &str,
    report_type: &str,
    issue_areas: &str,
    specific_issues: &str,
    government_entities: &str,
    foreign_entities: &str,
    posted_date: &str,
) -> LobbyingFiling {
    LobbyingFiling {
        filing_id: filing_id.to_string(),
        client_name: client_name.to_string(),
        client_description: client_description.to_string(),
        registrant_name: registrant_name.to_string(),
        registrant_address: registrant_address.to_string(),
        lobbyist_name: lobbyist_name.to_string(),
        lobbyist_title: lobbyist_title.to_string(),
        amount,
        year,
        quarter: quarter.to_string(),
        report_type: report_type.to_string(),
        issue_areas: issue_areas.to_string(),
        specific_issues: specific_issues.to_string(),
        government_entities: government_entities.to_string(),
        foreign_entities: foreign_entities.to_string(),
        posted_date: posted_date.to_string(),
    }
}
