//! Field definitions for every step of the registration form

/// One choice of a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    /// Value stored in the form state
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// Input widget used for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Multi-line text, edited with tui-textarea
    MultiLine,
    /// Choice from a fixed option list; empty value means nothing chosen
    Select(&'static [SelectOption]),
    /// Date in dd-mm-yyyy form
    Date,
    /// Yes/no radio pair, stored as "yes" or "no"
    YesNo,
}

impl FieldKind {
    /// Display label for a stored select value
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        match self {
            FieldKind::Select(options) => options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label),
            _ => None,
        }
    }
}

/// Static description of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Identifier used as the form-state key
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

const fn field(
    id: &'static str,
    label: &'static str,
    kind: FieldKind,
    placeholder: &'static str,
) -> FieldSpec {
    FieldSpec {
        id,
        label,
        kind,
        placeholder,
    }
}

const WHATSAPP_OPTIONS: &[SelectOption] = &[
    opt("none", "None"),
    opt("phone1", "Phone Number 1"),
    opt("phone2", "Phone Number 2"),
    opt("both", "Both"),
];

const WORKSHOP_TYPES: &[SelectOption] = &[
    opt("authorized", "Two-Wheeler"),
    opt("independent", "Four-Wheeler"),
    opt("specialized", "Both"),
];

const CHARGE_OPTIONS: &[SelectOption] = &[
    opt("free", "Free"),
    opt("fixed", "Fixed Rate"),
    opt("distance", "Distance Based"),
];

const BILLING_FREQUENCIES: &[SelectOption] = &[
    opt("weekly", "Weekly"),
    opt("biweekly", "Bi-weekly"),
    opt("monthly", "Monthly"),
];

const PAYMENT_MODES: &[SelectOption] = &[
    opt("upi", "UPI"),
    opt("bank-transfer", "Bank Transfer"),
    opt("cheque", "Cheque"),
];

const FLUID_TYPES: &[SelectOption] = &[
    opt("engine-oil", "Engine Oil"),
    opt("brake-fluid", "Brake Fluid"),
    opt("coolant", "Coolant"),
    opt("transmission-fluid", "Transmission Fluid"),
];

const SPECIALISATIONS: &[SelectOption] = &[
    opt("mechanic", "Mechanic"),
    opt("electrician", "Electrician"),
    opt("painter", "Painter"),
    opt("ac-specialist", "AC Specialist"),
];

/// Garage identity and contact details
pub const GARAGE_INFO_FIELDS: &[FieldSpec] = &[
    field("garageName", "Garage Name", FieldKind::Text, ""),
    field("ownerName", "Owner Name", FieldKind::Text, ""),
    field("phoneNumber1", "Phone Number 1", FieldKind::Text, ""),
    field("phoneNumber2", "Phone Number 2", FieldKind::Text, ""),
    field(
        "whatsappNumber",
        "WhatsApp Number",
        FieldKind::Select(WHATSAPP_OPTIONS),
        "Select WhatsApp number",
    ),
    field("pincode", "Pincode", FieldKind::Text, ""),
    field("operatingHours", "Operating Hours", FieldKind::Text, "e.g. 9 AM - 8 PM"),
    field("weeklyOff", "Weekly Off", FieldKind::Text, ""),
    field(
        "workshopType",
        "Type of Workshop",
        FieldKind::Select(WORKSHOP_TYPES),
        "Select workshop type",
    ),
    field("gstNumber", "GST Number", FieldKind::Text, ""),
    field("panNumber", "PAN Number", FieldKind::Text, ""),
    field("dateOnboarded", "Date Onboarded", FieldKind::Date, "dd-mm-yyyy"),
    field(
        "referredBy",
        "Referred By (if any)",
        FieldKind::Text,
        "Service Manager / Referral Code",
    ),
    field("mechHelpContact", "MechHelp Point of Contact", FieldKind::Text, ""),
    field("workshopAddress", "Workshop Address", FieldKind::MultiLine, ""),
];

/// Background and story of the garage
pub const ABOUT_GARAGE_FIELDS: &[FieldSpec] = &[
    field("yearEstablished", "Year Established", FieldKind::Text, ""),
    field("foundedBy", "Founded By", FieldKind::Text, ""),
    field(
        "inspiration",
        "Inspiration / Reason",
        FieldKind::MultiLine,
        "What inspired you to start this garage?",
    ),
    field(
        "growthJourney",
        "Growth Journey",
        FieldKind::MultiLine,
        "Tell us about your garage's growth journey",
    ),
    field(
        "challengesFaced",
        "Challenges Faced",
        FieldKind::MultiLine,
        "What challenges did you face and how did you overcome them?",
    ),
    field(
        "milestones",
        "Milestones",
        FieldKind::MultiLine,
        "Share your major achievements and milestones",
    ),
    field(
        "visionValues",
        "Vision & Values",
        FieldKind::MultiLine,
        "What are your garage's vision and core values?",
    ),
];

/// Selector gating the pick & drop details
pub static PICK_DROP_TOGGLE: FieldSpec = field(
    "pickDropAvailable",
    "Is Pick & Drop Available?",
    FieldKind::YesNo,
    "",
);

/// Revealed only when pick & drop is available
pub const PICK_DROP_FIELDS: &[FieldSpec] = &[
    field("freeOrPaid", "Free or Paid", FieldKind::Text, ""),
    field("charges", "Charges", FieldKind::Select(CHARGE_OPTIONS), ""),
    field("serviceArea", "Service Area", FieldKind::MultiLine, ""),
];

pub const PAYMENT_FIELDS: &[FieldSpec] = &[
    field("upiId", "UPI ID", FieldKind::Text, ""),
    field("bankAccountNumber", "Bank Account Number", FieldKind::Text, ""),
    field("ifscCode", "IFSC Code", FieldKind::Text, ""),
    field(
        "billingFrequency",
        "Billing Frequency",
        FieldKind::Select(BILLING_FREQUENCIES),
        "Select frequency",
    ),
    field(
        "preferredPaymentMode",
        "Preferred Mode of Payment",
        FieldKind::Select(PAYMENT_MODES),
        "Select payment mode",
    ),
];

/// Every static field id, used to seed the form state
pub fn static_fields() -> impl Iterator<Item = &'static FieldSpec> {
    GARAGE_INFO_FIELDS
        .iter()
        .chain(ABOUT_GARAGE_FIELDS)
        .chain(std::iter::once(&PICK_DROP_TOGGLE))
        .chain(PICK_DROP_FIELDS)
        .chain(PAYMENT_FIELDS)
}

pub fn find_static_field(id: &str) -> Option<&'static FieldSpec> {
    static_fields().find(|f| f.id == id)
}

static FLUID_FIELD_SPECS: [FieldSpec; 5] = [
    field(
        "fluidType",
        "Fluid Type",
        FieldKind::Select(FLUID_TYPES),
        "Select Fluid Type",
    ),
    field("brandName", "Brand Name", FieldKind::Text, "e.g. Castrol, Shell"),
    field("grade", "Grade (if applicable)", FieldKind::Text, "e.g. 5W-30, 10W-40"),
    field("rate", "Rate/L", FieldKind::Text, "Price per liter"),
    field(
        "usedFor",
        "Used For (Vehicle Types)",
        FieldKind::Text,
        "e.g. All Petrol Cars, Diesel SUVs",
    ),
];

/// Sub-form field of a fluid entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FluidField {
    FluidType,
    Brand,
    Grade,
    Rate,
    UsedFor,
}

impl FluidField {
    pub const ALL: [FluidField; 5] = [
        FluidField::FluidType,
        FluidField::Brand,
        FluidField::Grade,
        FluidField::Rate,
        FluidField::UsedFor,
    ];

    pub fn spec(self) -> &'static FieldSpec {
        &FLUID_FIELD_SPECS[self as usize]
    }
}

static STAFF_FIELD_SPECS: [FieldSpec; 5] = [
    field("staffName", "Name", FieldKind::Text, ""),
    field("staffPhone", "Phone Number", FieldKind::Text, ""),
    field(
        "specialist",
        "Specialist",
        FieldKind::Select(SPECIALISATIONS),
        "Select specialization",
    ),
    field("photoLink", "Photo Link", FieldKind::Text, ""),
    field("notes", "Notes", FieldKind::MultiLine, ""),
];

/// Sub-form field of a staff entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaffField {
    Name,
    Phone,
    Specialist,
    PhotoLink,
    Notes,
}

impl StaffField {
    pub const ALL: [StaffField; 5] = [
        StaffField::Name,
        StaffField::Phone,
        StaffField::Specialist,
        StaffField::PhotoLink,
        StaffField::Notes,
    ];

    pub fn spec(self) -> &'static FieldSpec {
        &STAFF_FIELD_SPECS[self as usize]
    }
}

static PRICE_FIELD_SPECS: [FieldSpec; 4] = [
    field("hatchback", "Hatchback Price", FieldKind::Text, "Hatchback Price"),
    field("sedan", "Sedan Price", FieldKind::Text, "Sedan Price"),
    field("suv", "SUV Price", FieldKind::Text, "SUV Price"),
    field("duration", "Duration (minutes)", FieldKind::Text, "Duration"),
];

/// Per-vehicle-class price or duration revealed under a selected service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceField {
    Hatchback,
    Sedan,
    Suv,
    Duration,
}

impl PriceField {
    pub const ALL: [PriceField; 4] = [
        PriceField::Hatchback,
        PriceField::Sedan,
        PriceField::Suv,
        PriceField::Duration,
    ];

    pub fn spec(self) -> &'static FieldSpec {
        &PRICE_FIELD_SPECS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_static_field_ids_are_unique() {
        let mut seen = HashSet::new();
        for spec in static_fields() {
            assert!(seen.insert(spec.id), "duplicate field id {}", spec.id);
        }
    }

    #[test]
    fn test_entry_field_specs_line_up_with_variants() {
        assert_eq!(FluidField::Brand.spec().id, "brandName");
        assert_eq!(FluidField::UsedFor.spec().id, "usedFor");
        assert_eq!(StaffField::Notes.spec().kind, FieldKind::MultiLine);
        assert_eq!(PriceField::Duration.spec().label, "Duration (minutes)");
    }

    #[test]
    fn test_option_label_lookup() {
        let spec = find_static_field("billingFrequency").unwrap();
        assert_eq!(spec.kind.option_label("biweekly"), Some("Bi-weekly"));
        assert_eq!(spec.kind.option_label("yearly"), None);
        assert_eq!(FieldKind::Text.option_label("anything"), None);
    }

    #[test]
    fn test_workshop_type_stores_partner_kind() {
        let spec = find_static_field("workshopType").unwrap();
        assert_eq!(spec.kind.option_label("authorized"), Some("Two-Wheeler"));
        assert_eq!(spec.kind.option_label("independent"), Some("Four-Wheeler"));
        assert_eq!(spec.kind.option_label("specialized"), Some("Both"));
        assert_eq!(spec.kind.option_label("two-wheeler"), None);
    }

    #[test]
    fn test_pick_drop_toggle_is_yes_no() {
        assert_eq!(PICK_DROP_TOGGLE.kind, FieldKind::YesNo);
        assert!(find_static_field("pickDropAvailable").is_some());
    }
}
