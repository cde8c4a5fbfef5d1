//! JSON-LD 结构化数据构建器
//!
//! 生成 schema.org 词汇的结构化数据，供搜索引擎解析。

use serde_json::{json, Value};

pub const COMPANY_NAME: &str = "Hubris Minerals";
pub const COMPANY_URL: &str = "https://hubrisminerals.info";
pub const COMPANY_LOGO_PATH: &str = "/images/logo.png";
pub const COMPANY_EMAIL: &str = "contact@hubrisminerals.info";
pub const COMPANY_PHONE: &str = "+243 973091479";
pub const COMPANY_COUNTRY_CODE: &str = "CD";
pub const COMPANY_REGION: &str = "Democratic Republic of Congo";

/// Organization 结构化数据
pub fn organization_schema() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": COMPANY_NAME,
        "description": "Premier gold mining and export company from the Democratic Republic of Congo, specializing in ethical sourcing and premium quality gold products.",
        "url": COMPANY_URL,
        "logo": format!("{}{}", COMPANY_URL, COMPANY_LOGO_PATH),
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": COMPANY_PHONE,
            "contactType": "sales",
            "email": COMPANY_EMAIL
        },
        "address": {
            "@type": "PostalAddress",
            "addressCountry": COMPANY_COUNTRY_CODE,
            "addressRegion": COMPANY_REGION
        },
        "sameAs": [
            "https://www.facebook.com/hubrisminerals",
            "https://www.linkedin.com/company/hubrisminerals"
        ]
    })
}

/// LocalBusiness 结构化数据
pub fn local_business_schema() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": COMPANY_NAME,
        "description": "Professional gold mining, refining, and export services in the Democratic Republic of Congo.",
        "url": COMPANY_URL,
        "telephone": COMPANY_PHONE,
        "email": COMPANY_EMAIL,
        "address": {
            "@type": "PostalAddress",
            "addressCountry": COMPANY_COUNTRY_CODE,
            "addressRegion": COMPANY_REGION
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": "-4.0383",
            "longitude": "21.7587"
        },
        "openingHours": "Mo-Fr 08:00-18:00, Sa 09:00-16:00",
        "priceRange": "$$$",
        "currenciesAccepted": "USD",
        "paymentAccepted": "Cash, Check, Invoice"
    })
}

/// Product 结构化数据
///
/// 产品目录内容由站点数据层提供，这里只负责组装词汇。
pub fn product_schema(name: &str, description: &str, image_path: &str, weight: &str, purity: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": name,
        "description": description,
        "image": format!("{}{}", COMPANY_URL, image_path),
        "brand": {
            "@type": "Brand",
            "name": COMPANY_NAME
        },
        "manufacturer": {
            "@type": "Organization",
            "name": COMPANY_NAME
        },
        "offers": {
            "@type": "Offer",
            "price": "Contact for Quote",
            "priceCurrency": "USD",
            "availability": "https://schema.org/InStock",
            "seller": {
                "@type": "Organization",
                "name": COMPANY_NAME
            }
        },
        "additionalProperty": [
            {
                "@type": "PropertyValue",
                "name": "Weight",
                "value": weight
            },
            {
                "@type": "PropertyValue",
                "name": "Purity",
                "value": purity
            },
            {
                "@type": "PropertyValue",
                "name": "Origin",
                "value": COMPANY_REGION
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_schema_fields() {
        let schema = organization_schema();
        assert_eq!(schema["@type"], "Organization");
        assert_eq!(schema["name"], COMPANY_NAME);
        assert_eq!(schema["contactPoint"]["email"], COMPANY_EMAIL);
        assert_eq!(schema["address"]["addressCountry"], COMPANY_COUNTRY_CODE);
    }

    #[test]
    fn test_local_business_schema_fields() {
        let schema = local_business_schema();
        assert_eq!(schema["@type"], "LocalBusiness");
        assert_eq!(schema["telephone"], COMPANY_PHONE);
        assert_eq!(schema["geo"]["@type"], "GeoCoordinates");
    }

    #[test]
    fn test_product_schema_fields() {
        let schema = product_schema(
            "Gold Bar 10g",
            "Certified 99.99% pure gold bar",
            "/images/products/bar-10g.jpg",
            "10g",
            "99.99%",
        );
        assert_eq!(schema["@type"], "Product");
        assert_eq!(schema["name"], "Gold Bar 10g");
        assert_eq!(
            schema["image"],
            format!("{}/images/products/bar-10g.jpg", COMPANY_URL)
        );
        assert_eq!(schema["additionalProperty"][1]["value"], "99.99%");
    }
}
