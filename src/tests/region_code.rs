/// ISO codes of the regions in the test metadata.
pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ag() -> &'static str {
        "AG"
    }

    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn kz() -> &'static str {
        "KZ"
    }

    pub fn mx() -> &'static str {
        "MX"
    }

    pub fn ru() -> &'static str {
        "RU"
    }

    pub fn sg() -> &'static str {
        "SG"
    }

    pub fn us() -> &'static str {
        "US"
    }

    /// Not present in the test metadata.
    pub fn zz() -> &'static str {
        "ZZ"
    }
}
