//! Static catalogs backing the search UI and filter validation
//!
//! These mirror the dropdown option lists exposed by the index page and the
//! set of filter keys the upstream provider accepts. Loaded once, never
//! mutated.

/// Industry dropdown options
pub static INDUSTRIES: &[&str] = &[
    "Railroad Manufacture",
    "Gambling & Casinos",
    "Alternative Dispute Resolution",
    "Translation & Localization",
    "Museums & Institutions",
    "Motion Pictures & Film",
    "Information Technology & Services",
    "Apparel & Fashion",
    "Farming",
    "Judiciary",
    "Banking",
    "Airlines/Aviation",
    "Photography",
    "Telecommunications",
    "Printing",
    "Machinery",
    "Textiles",
    "Hospitality",
    "Transportation/Trucking/Railroad",
    "Retail",
    "Construction",
    "Utilities",
    "Supermarkets",
    "Research",
    "Sports",
    "Internet",
    "Accounting",
    "Insurance",
    "Automotive",
    "Semiconductors",
    "Warehousing",
    "Restaurants",
    "Entertainment",
    "Cosmetics",
    "Chemicals",
    "Biotechnology",
    "Philanthropy",
    "Wholesale",
    "Design",
    "Ranching",
    "Libraries",
    "Dairy",
    "Newspapers",
    "Maritime",
    "Pharmaceuticals",
    "Military",
    "Outsourcing/Offshoring",
    "Fishery",
    "Furniture",
    "Animation",
    "Publishing",
    "Plastics",
    "Other",
    "Wireless",
    "Music",
    "E-learning",
    "Veterinary",
    "Shipbuilding",
    "Fundraising",
    "Tobacco",
    "Nanotechnology",
    "Think Tanks",
    "Public Relations & Communications",
    "Import & Export",
    "Mechanical Or Industrial Engineering",
    "Arts & Crafts",
    "Computer Hardware",
    "Electrical & Electronic Manufacturing",
    "Consumer Electronics",
    "Human Resources",
    "Civil Engineering",
    "Capital Markets",
    "Non-profit Organization Management",
    "Financial Services",
    "Packaging & Containers",
    "Computer Software",
    "Alternative Medicine",
    "Consumer Services",
    "Luxury Goods & Jewelry",
    "Industrial Automation",
    "Computer & Network Security",
    "Civic & Social Organization",
    "Facilities Services",
    "Medical Practice",
    "Primary/Secondary Education",
    "Staffing & Recruiting",
    "Broadcast Media",
    "Marketing & Advertising",
    "Health, Wellness & Fitness",
    "Logistics & Supply Chain",
    "Business Supplies & Equipment",
    "Real Estate",
    "Information Services",
    "Education Management",
    "Consumer Goods",
    "Food & Beverages",
    "Law Practice",
    "Government Administration",
    "Management Consulting",
    "Law Enforcement",
    "Building Materials",
    "Executive Office",
    "Political Organization",
    "Government Relations",
    "Renewables & Environment",
    "Investment Management",
    "Hospital & Health Care",
    "Glass, Ceramics & Concrete",
    "Higher Education",
    "Program Development",
    "Oil & Energy",
    "International Affairs",
    "Fine Art",
    "International Trade & Development",
    "Mining & Metals",
    "Medical Device",
    "Food Production",
    "Market Research",
    "Paper & Forest Products",
    "Computer Networking",
    "Defense & Space",
    "Writing & Editing",
    "Graphic Design",
    "Environmental Services",
    "Computer Games",
    "Security & Investigations",
    "Venture Capital & Private Equity",
    "Aviation & Aerospace",
    "Public Policy",
    "Events Services",
    "Public Safety",
    "Package/Freight Delivery",
    "Architecture & Planning",
    "Leisure, Travel & Tourism",
    "Commercial Real Estate",
    "Individual & Family Services",
    "Investment Banking",
    "Sporting Goods",
    "Professional Training & Coaching",
    "Legal Services",
    "Recreational Facilities & Services",
    "Legislative Office",
    "Religious Institutions",
    "Mental Health Care",
    "Online Media",
    "Wine & Spirits",
    "Media Production",
    "Performing Arts",
];

/// Country dropdown options
pub static COUNTRIES: &[&str] = &[
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "India",
    "Germany",
    "France",
    "Brazil",
    "Japan",
    "China",
    "Singapore",
    "Netherlands",
    "Spain",
    "Sweden",
    "Switzerland",
    "Italy",
    "Israel",
    "Ireland",
    "Norway",
    "Denmark",
    "Finland",
    "Belgium",
    "New Zealand",
    "Austria",
    "Poland",
    "South Korea",
    "Mexico",
    "South Africa",
    "Portugal",
    "Argentina",
    "Chile",
    "Colombia",
    "Russia",
    "Turkey",
    "Indonesia",
    "Malaysia",
    "Thailand",
    "Vietnam",
    "Philippines",
    "United Arab Emirates",
    "Saudi Arabia",
];

/// Filter keys the upstream filter-search endpoint accepts
///
/// Client-supplied keys outside this set are dropped before the payload is
/// forwarded upstream.
pub static ALLOWED_FILTERS: &[&str] = &[
    "name",
    "website",
    "exact_website",
    "size",
    "industry",
    "country",
    "location",
    "created_at_gte",
    "created_at_lte",
    "last_updated_gte",
    "last_updated_lte",
    "employees_count_gte",
    "employees_count_lte",
    "source_id",
    "founded_year_gte",
    "founded_year_lte",
    "funding_total_rounds_count_gte",
    "funding_total_rounds_count_lte",
    "funding_last_round_type",
    "funding_last_round_date_gte",
    "funding_last_round_date_lte",
];

/// Check whether a filter key is accepted by the upstream provider
pub fn is_allowed_filter(key: &str) -> bool {
    ALLOWED_FILTERS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_filters() {
        assert!(is_allowed_filter("country"));
        assert!(is_allowed_filter("funding_last_round_type"));
        assert!(!is_allowed_filter("page"));
        assert!(!is_allowed_filter("limit"));
        assert!(!is_allowed_filter("drop_tables"));
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(INDUSTRIES.len(), 148);
        assert_eq!(COUNTRIES.len(), 41);
        assert!(INDUSTRIES.contains(&"Retail"));
        assert!(COUNTRIES.contains(&"Italy"));
    }
}
