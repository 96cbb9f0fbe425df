//! Canonical field names per source.
//!
//! Every canonical table refers to its columns through these constants so a
//! typo is a compile error instead of an empty join.

/// Web crawl fields (`web_` prefix).
pub mod web {
    pub const DOMAIN: &str = "web_domain";
    pub const DOMAIN_SUFFIX: &str = "web_domain_suffix";
    pub const LANGUAGE: &str = "web_language";
    pub const COMPANY_NAME: &str = "web_company_name";
    pub const CITY: &str = "web_city";
    pub const COUNTRY: &str = "web_country";
    pub const REGION: &str = "web_region";
    pub const PHONE: &str = "web_phone";
    pub const SITE_NAME: &str = "web_site_name";
    pub const TLD: &str = "web_tld";
    pub const CATEGORY: &str = "web_category";
}

/// Social directory fields (`fb_` prefix).
pub mod social {
    pub const DOMAIN: &str = "fb_domain";
    pub const ADDRESS: &str = "fb_address";
    /// Pipe-delimited category list; only exists before expansion.
    pub const CATEGORIES: &str = "fb_categories";
    /// Single category produced by expanding [`CATEGORIES`].
    pub const CATEGORY: &str = "fb_category";
    pub const CITY: &str = "fb_city";
    pub const COUNTRY_CODE: &str = "fb_country_code";
    pub const COUNTRY: &str = "fb_country";
    pub const DESCRIPTION: &str = "fb_description";
    pub const EMAIL: &str = "fb_email";
    pub const LINK: &str = "fb_link";
    pub const COMPANY_NAME: &str = "fb_company_name";
    pub const PAGE_TYPE: &str = "fb_page_type";
    pub const PHONE: &str = "fb_phone";
    pub const PHONE_COUNTRY_CODE: &str = "fb_phone_country_code";
    pub const REGION_CODE: &str = "fb_region_code";
    pub const REGION: &str = "fb_region";
    pub const ZIP_CODE: &str = "fb_zip_code";
}

/// Map directory fields (`gg_` prefix).
pub mod directory {
    pub const ADDRESS: &str = "gg_address";
    pub const CATEGORY: &str = "gg_category";
    pub const CITY: &str = "gg_city";
    pub const COUNTRY_CODE: &str = "gg_country_code";
    pub const COUNTRY: &str = "gg_country";
    pub const COMPANY_NAME: &str = "gg_company_name";
    pub const PHONE: &str = "gg_phone";
    pub const PHONE_COUNTRY_CODE: &str = "gg_phone_country_code";
    pub const RAW_ADDRESS: &str = "gg_raw_address";
    pub const RAW_PHONE: &str = "gg_raw_phone";
    pub const REGION_CODE: &str = "gg_region_code";
    pub const REGION: &str = "gg_region";
    pub const TEXT: &str = "gg_text";
    pub const ZIP_CODE: &str = "gg_zip_code";
    pub const DOMAIN: &str = "gg_domain";
}
