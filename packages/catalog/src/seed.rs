// ABOUTME: Hard-coded catalog used by the bulk-load seed endpoint
// ABOUTME: Deye inverters and batteries, BSL storage, SunPower panels

use std::collections::HashMap;

use crate::types::{ProductCategory, ProductCreateInput};

fn specs(pairs: &[(&str, &str)]) -> Option<HashMap<String, serde_json::Value>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect(),
    )
}

fn product(
    name: &str,
    category: ProductCategory,
    description: &str,
    regular_price: f64,
    sale_price: f64,
    image_url: &str,
    spec_pairs: &[(&str, &str)],
) -> ProductCreateInput {
    ProductCreateInput {
        name: name.to_string(),
        category,
        description: description.to_string(),
        regular_price,
        sale_price,
        image_url: image_url.to_string(),
        specs: specs(spec_pairs),
        features: None,
        in_stock: true,
        backorder: false,
    }
}

const INVERTER_IMAGE: &str = "https://images.pexels.com/photos/9875409/pexels-photo-9875409.jpeg";
const BATTERY_IMAGE: &str = "https://images.pexels.com/photos/9875441/pexels-photo-9875441.jpeg";
const PANEL_IMAGE: &str = "https://images.pexels.com/photos/9875423/pexels-photo-9875423.jpeg";

/// The fixed product list loaded by `POST /api/seed-products`.
pub fn seed_products() -> Vec<ProductCreateInput> {
    use ProductCategory::{Batteries, Inverters, Panels};

    vec![
        // Inverters
        product(
            "Deye 6kW Hybrid Inverter",
            Inverters,
            "Deye-SUN-6k-SG01LP1-US hybrid solar inverter. Perfect for residential solar installations with 6kW capacity.",
            250000.0,
            245000.0,
            INVERTER_IMAGE,
            &[("power", "6kW"), ("type", "Hybrid"), ("model", "SG01LP1-US")],
        ),
        product(
            "Deye 8kW Hybrid Inverter",
            Inverters,
            "Deye-SUN-8k-SG01LP1-US hybrid solar inverter. Ideal for medium-sized homes with higher energy demands.",
            265000.0,
            259000.0,
            INVERTER_IMAGE,
            &[("power", "8kW"), ("type", "Hybrid"), ("model", "SG01LP1-US")],
        ),
        product(
            "Deye 10kW Hybrid Inverter",
            Inverters,
            "Deye-SUN-10k-SG01LP1-US hybrid solar inverter. High-capacity solution for larger residential or small commercial use.",
            300000.0,
            294000.0,
            INVERTER_IMAGE,
            &[("power", "10kW"), ("type", "Hybrid"), ("model", "SG01LP1-US")],
        ),
        product(
            "Deye 12kW Hybrid Inverter",
            Inverters,
            "Deye-SUN-12k-SG01LP1-US hybrid solar inverter. Our most powerful inverter for maximum energy independence.",
            325000.0,
            318000.0,
            INVERTER_IMAGE,
            &[("power", "12kW"), ("type", "Hybrid"), ("model", "SG01LP1-US")],
        ),
        // Batteries - BSL
        product(
            "BSL 5kWh Rack Battery",
            Batteries,
            "BSL-B-LFP48-100E 5kWh Rack Mount LiFePO4 Battery. Reliable energy storage with long cycle life.",
            165000.0,
            162000.0,
            BATTERY_IMAGE,
            &[("capacity", "5kWh"), ("type", "LiFePO4"), ("mount", "Rack")],
        ),
        product(
            "BSL 5kWh Rack Brackets",
            Batteries,
            "BSL-B-LFP48-100E 5kWh Rack Brackets. Professional mounting solution for BSL batteries.",
            3500.0,
            3400.0,
            BATTERY_IMAGE,
            &[("compatibility", "BSL 5kWh"), ("type", "Mounting Bracket")],
        ),
        product(
            "BSL 10kWh Rack Battery",
            Batteries,
            "BSL-B-LFP48-200E 10kWh Rack Mount LiFePO4 Battery. Double capacity for extended backup power.",
            250000.0,
            245000.0,
            BATTERY_IMAGE,
            &[("capacity", "10kWh"), ("type", "LiFePO4"), ("mount", "Rack")],
        ),
        product(
            "BSL 10kWh Rack Brackets",
            Batteries,
            "BSL-B-LFP48-200E 10kWh Rack Brackets. Secure mounting for larger battery systems.",
            4500.0,
            4400.0,
            BATTERY_IMAGE,
            &[("compatibility", "BSL 10kWh"), ("type", "Mounting Bracket")],
        ),
        product(
            "BSL Li-Pro 10.24kWh Wall Battery",
            Batteries,
            "BSL-Li-Pro 10240 10.24kWh Wall Mount Battery. Sleek wall-mounted design for space efficiency.",
            275000.0,
            269000.0,
            BATTERY_IMAGE,
            &[("capacity", "10.24kWh"), ("type", "LiFePO4"), ("mount", "Wall")],
        ),
        // Batteries - Deye
        product(
            "Deye 5.12kWh Battery",
            Batteries,
            "Deye 5.12kWh LiFePO4 Battery. Compact and efficient energy storage solution.",
            135000.0,
            132000.0,
            BATTERY_IMAGE,
            &[("capacity", "5.12kWh"), ("brand", "Deye"), ("type", "LiFePO4")],
        ),
        product(
            "Deye 10.24kWh Battery",
            Batteries,
            "Deye 10.24kWh LiFePO4 Battery. Mid-range capacity for everyday household needs.",
            245000.0,
            240000.0,
            BATTERY_IMAGE,
            &[("capacity", "10.24kWh"), ("brand", "Deye"), ("type", "LiFePO4")],
        ),
        product(
            "Deye 12kWh Battery",
            Batteries,
            "Deye 12kWh LiFePO4 Battery. Extended capacity for larger homes.",
            310000.0,
            304000.0,
            BATTERY_IMAGE,
            &[("capacity", "12kWh"), ("brand", "Deye"), ("type", "LiFePO4")],
        ),
        product(
            "Deye 16kWh Battery",
            Batteries,
            "Deye 16kWh LiFePO4 Battery. Maximum capacity for complete energy independence.",
            350000.0,
            343000.0,
            BATTERY_IMAGE,
            &[("capacity", "16kWh"), ("brand", "Deye"), ("type", "LiFePO4")],
        ),
        // Panels
        product(
            "450W SunPower Maxeon Bi-Facial Panel",
            Panels,
            "450w SunPower Maxeon Blk Bi-Facial solar panel. Premium efficiency with bifacial technology for maximum power generation.",
            15500.0,
            15200.0,
            PANEL_IMAGE,
            &[("power", "450W"), ("type", "Bi-Facial"), ("brand", "SunPower Maxeon")],
        ),
        product(
            "545W SunPower Maxeon Bifacial Panel",
            Panels,
            "545W SunPower Maxeon Bifacial solar panel. High-output panel for maximum energy harvest.",
            16500.0,
            16200.0,
            PANEL_IMAGE,
            &[("power", "545W"), ("type", "Bi-Facial"), ("brand", "SunPower Maxeon")],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_list_is_well_formed() {
        let seed = seed_products();
        assert_eq!(seed.len(), 15);

        for input in &seed {
            assert!(!input.name.is_empty());
            assert!(!input.description.is_empty());
            assert!(input.regular_price > 0.0);
            assert!(input.sale_price > 0.0);
            assert!(input.specs.is_some());
            assert!(input.in_stock);
        }
    }
}
