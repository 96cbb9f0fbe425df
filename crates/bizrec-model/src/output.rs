//! Resolved entity schema and linkage keys.

use crate::fields::{directory, social, web};

/// Ordered fields of the resolved entity table.
pub const OUTPUT_FIELDS: [&str; 42] = [
    social::DOMAIN,
    web::DOMAIN,
    directory::DOMAIN,
    social::COMPANY_NAME,
    web::COMPANY_NAME,
    directory::COMPANY_NAME,
    social::CATEGORY,
    web::CATEGORY,
    directory::CATEGORY,
    social::COUNTRY,
    web::COUNTRY,
    directory::COUNTRY,
    social::REGION,
    web::REGION,
    directory::REGION,
    social::CITY,
    web::CITY,
    directory::CITY,
    social::PHONE,
    web::PHONE,
    directory::PHONE,
    social::COUNTRY_CODE,
    directory::COUNTRY_CODE,
    social::REGION_CODE,
    directory::REGION_CODE,
    social::ADDRESS,
    directory::ADDRESS,
    social::ZIP_CODE,
    directory::ZIP_CODE,
    social::PHONE_COUNTRY_CODE,
    directory::PHONE_COUNTRY_CODE,
    social::DESCRIPTION,
    social::EMAIL,
    social::LINK,
    social::PAGE_TYPE,
    web::DOMAIN_SUFFIX,
    web::LANGUAGE,
    web::SITE_NAME,
    web::TLD,
    directory::RAW_ADDRESS,
    directory::RAW_PHONE,
    directory::TEXT,
];

/// Sort keys of the resolved table, all ascending.
pub const SORT_KEYS: [&str; 6] = [
    social::DOMAIN,
    social::COMPANY_NAME,
    social::CATEGORY,
    social::COUNTRY,
    social::REGION,
    social::CITY,
];

/// `{company_name, phone, domain}` triple used to corroborate a match against
/// the map directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternateKey {
    pub company_name: &'static str,
    pub phone: &'static str,
    pub domain: &'static str,
}

impl AlternateKey {
    pub const fn fields(&self) -> [&'static str; 3] {
        [self.company_name, self.phone, self.domain]
    }
}

pub const DIRECTORY_KEY: AlternateKey = AlternateKey {
    company_name: directory::COMPANY_NAME,
    phone: directory::PHONE,
    domain: directory::DOMAIN,
};

pub const SOCIAL_KEY: AlternateKey = AlternateKey {
    company_name: social::COMPANY_NAME,
    phone: social::PHONE,
    domain: social::DOMAIN,
};

pub const WEB_KEY: AlternateKey = AlternateKey {
    company_name: web::COMPANY_NAME,
    phone: web::PHONE,
    domain: web::DOMAIN,
};
