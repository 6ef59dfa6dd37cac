//! Static catalog of services a garage can offer

/// A single offered service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    /// Stable identifier used as the toggle-map key
    pub id: &'static str,
    pub label: &'static str,
}

/// A named group of services, rendered under one heading
#[derive(Debug, Clone, Copy)]
pub struct ServiceCategory {
    pub name: &'static str,
    pub services: &'static [Service],
}

const fn svc(id: &'static str, label: &'static str) -> Service {
    Service { id, label }
}

/// All service categories in display order
pub static SERVICE_CATALOG: &[ServiceCategory] = &[
    ServiceCategory {
        name: "Periodic Services",
        services: &[
            svc("general-checkup", "General Checkup"),
            svc("engine-oil-change", "Engine Oil Change"),
            svc("oil-filter-replacement", "Oil Filter Replacement"),
            svc("air-filter-replacement", "Air Filter Replacement"),
            svc("ac-filter-replacement", "AC Filter Replacement"),
            svc("fuel-filter-replacement", "Fuel Filter Replacement"),
            svc("all-top-ups", "All-Top Ups"),
            svc("top-wash", "Top Wash"),
            svc("washing-interior-vacuum", "Washing + Interior Vacuum"),
            svc("throttle-body-cleaning", "Throttle Body Cleaning"),
            svc("spark-plug-cleaning", "Spark Plug Cleaning"),
            svc("spark-plug-replacement", "Spark Plug Replacement"),
            svc("timing-belt-adjustment", "Timing Belt Adjustment"),
            svc("fuel-injector-cleaning", "Fuel Injector Cleaning"),
            svc("wiper-replacement", "Wiper Replacement"),
            svc("wiper-motor-replacement", "Wiper Motor Replacement"),
            svc("water-pump-belt-replacement", "Water Pump Belt Replacement"),
        ],
    },
    ServiceCategory {
        name: "Brake Maintenance",
        services: &[
            svc("brake-pad", "Front Brake Pad (Opening and Fitting)"),
            svc("brake-shoes", "Rear Brake Shoes (Opening and Fitting)"),
            svc("brake-disc", "Front Brake Disc (Opening and Fitting)"),
            svc("caliper-pin", "Caliper Pin Replacement"),
            svc("disc-turning", "Disc Turning"),
            svc("hand-brake", "Hand Brake Wire Replacement"),
            svc("brake-drums", "Brake Drums Turning"),
            svc("wheel-cylinder", "Wheel Cylinder Turning"),
            svc("headlight-adjustment", "Headlight Adjustment"),
            svc("caliper-greasing", "Caliper Pin Greasing"),
            svc("front-brake-cleaning", "Front Brake Pads Cleaning"),
            svc("rear-brake-cleaning", "Rear Brake Pad/Shoes Cleaning"),
        ],
    },
    ServiceCategory {
        name: "AC Services",
        services: &[
            svc("condenser-cleaning", "Condenser Cleaning"),
            svc("ac-filter-cleaning", "AC Filter Cleaning"),
            svc("cooling-coil-cleaning", "Cooling Coil Cleaning"),
            svc("cooling-coil-replacement", "Cooling Coil Replacement"),
            svc("condenser-replacement", "Condenser Replacement"),
            svc("compressor-replacement", "Compressor Replacement"),
            svc("heating-coil-replacement", "Heating Coil Replacement"),
            svc("v-belt-replacement", "V-Belt Replacement"),
            svc("ac-blower-replacement", "AC Blower Motor Replacement"),
            svc("compressor-belt-replacement", "Compressor Belt Replacement"),
        ],
    },
    ServiceCategory {
        name: "Batteries",
        services: &[
            svc("battery-replacement", "Battery Replacement"),
            svc("battery-terminal-coating", "Battery Terminal Coating"),
            svc("maf-sensor-cleaning", "MAF/02 Sensor Cleaning"),
            svc("alternator-replacement", "Alternator Replacement"),
            svc("alternator-repair", "Alternator Repair"),
            svc("alternator-belt-replacement", "Alternator Belt Replacement"),
        ],
    },
    ServiceCategory {
        name: "Tyre Services",
        services: &[
            svc("tyre-replacement", "Tyre Replacement"),
            svc("wheel-alignment", "Wheel Alignment"),
            svc("wheel-balancing", "Wheel Balancing"),
            svc("tyre-rotation", "Tyre Rotation"),
        ],
    },
    ServiceCategory {
        name: "Denting and Painting",
        services: &[
            svc("front-bumper-paint", "Front Bumper Paint"),
            svc("bonnet-paint", "Bonnet Paint"),
            svc("rear-bumper-paint", "Rear Bumper Paint"),
            svc("boot-paint", "Boot Paint"),
            svc("full-body-paint", "Full Body Dent Paint"),
            svc("alloy-paint", "Alloy Paint (4X)"),
        ],
    },
    ServiceCategory {
        name: "Detailing Services",
        services: &[
            svc("3m-rubbing", "3M Car Rubbing & Polishing"),
            svc("3m-ceramic", "3M Ceramic Coating"),
            svc("graphene-coating", "Graphene Coating – 10H"),
            svc("3m-teflon", "3M Teflon Coating"),
            svc("meguiars-teflon", "Meguiar's Teflon Coating"),
            svc("ppf-plus", "PPF – Garware Plus"),
            svc("ppf-premium", "PPF – Garware Premium"),
        ],
    },
    ServiceCategory {
        name: "Windshields and Lights",
        services: &[
            svc("front-windshield", "Front Windshield Replacement"),
            svc("rear-windshield", "Rear Windshield Replacement"),
            svc("door-glass", "Door Glass Replacement"),
            svc("front-headlight", "Front Headlight Replacement"),
            svc("rear-taillight", "Rear Tail Light Replacement"),
            svc("fog-light", "Fog Light Replacement"),
            svc("side-mirror", "Side Mirror Replacement"),
        ],
    },
    ServiceCategory {
        name: "Clutch and Body Parts",
        services: &[
            svc("clutch-set", "Clutch Set Replacement"),
            svc("flywheel-replacement", "Flywheel Replacement"),
            svc("clutch-bearing", "Clutch Bearing Replacement"),
            svc("flywheel-turning", "Flywheel Turning"),
            svc("clutch-overhaul", "Clutch Overhaul"),
            svc("bumper-replacement", "Front/Rear Bumper Replacement"),
            svc("door-replacements", "Door Replacements (All Sides)"),
            svc("fender-replacement", "Fender, Boot, Bonnet Replacement"),
            svc("door-adjustment", "Door Adjustment"),
            svc("bumper-bracket", "Bumper Bracket Adjustment"),
            svc("abs-issue", "ABS Issue"),
            svc("clutch-transmission", "Clutch & Transmission Troubles"),
        ],
    },
    ServiceCategory {
        name: "Suspension and Fitments",
        services: &[
            svc("eps-module", "EPS Module Repair"),
            svc("steering-rack", "Steering Rack Repair"),
            svc("shock-absorber", "Front/Rear Shock Absorber Replacement"),
            svc("lower-arm", "Suspension Lower Arm Replacement"),
            svc("link-rod", "Link Rod Replacement"),
            svc("tie-rod", "Tie Rod End Replacement"),
            svc("suspension-inspection", "Complete Suspension Inspection"),
            svc("shocker-mount", "Front Shocker Mount Replacement"),
            svc("front-axle", "Front Axle Repair"),
        ],
    },
];

/// Iterate every service across all categories, in display order
pub fn all_services() -> impl Iterator<Item = &'static Service> {
    SERVICE_CATALOG.iter().flat_map(|c| c.services.iter())
}

/// Look up a service by id
pub fn find_service(id: &str) -> Option<&'static Service> {
    all_services().find(|s| s.id == id)
}

/// Look up a category by case-insensitive name
pub fn find_category(name: &str) -> Option<&'static ServiceCategory> {
    SERVICE_CATALOG
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
}
