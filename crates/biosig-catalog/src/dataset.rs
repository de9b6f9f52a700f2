//! The reference biosignature dataset.
//!
//! Sources: NASA, ESA, published research articles. The table is fixed at
//! build time; row order here is the display order everywhere else.

use crate::entities::Biosignature;

pub const BIOSIGNATURES: &[Biosignature] = &[
    Biosignature {
        name: "Methane (CH₄)",
        category: "Chemical",
        found_on: "Mars, Titan",
        missions: "Curiosity, JWST",
        description: "Produced by microbial life and geological processes.",
    },
    Biosignature {
        name: "Phosphine (PH₃)",
        category: "Chemical",
        found_on: "Venus (Debated)",
        missions: "TBD",
        description: "Possible indicator of anaerobic life; controversial detection.",
    },
    Biosignature {
        name: "Carbon Isotope Ratios",
        category: "Isotopic",
        found_on: "Mars",
        missions: "Perseverance",
        description: "Microbial life prefers lighter isotopes, creating distinctive ratios.",
    },
    Biosignature {
        name: "Stromatolites",
        category: "Morphological",
        found_on: "Earth (Fossil Record)",
        missions: "N/A",
        description: "Layered rock formations created by microbial mats.",
    },
    Biosignature {
        name: "Oxygen (O₂) and Ozone (O₃)",
        category: "Atmospheric",
        found_on: "Earth, Exoplanets",
        missions: "Hubble, JWST",
        description: "High oxygen levels can indicate photosynthesis.",
    },
    Biosignature {
        name: "Amino Acids",
        category: "Organic",
        found_on: "Meteorites",
        missions: "OSIRIS-REx",
        description: "Building blocks of proteins; essential for life.",
    },
    Biosignature {
        name: "Biogenic Magnetite",
        category: "Mineralogical",
        found_on: "Mars (ALH84001 meteorite)",
        missions: "Mars Sample Return",
        description: "Magnetite crystals with specific morphologies indicative of biological origin.",
    },
    Biosignature {
        name: "Methyl Bromide (CH₃Br)",
        category: "Chemical",
        found_on: "Exoplanets (Hypothetical)",
        missions: "Future Observations",
        description: "Potential biosignature gas that could indicate biological activity.",
    },
    Biosignature {
        name: "Nitric Oxide (NO)",
        category: "Chemical",
        found_on: "Exoplanets (Hypothetical)",
        missions: "Future Observations",
        description: "Emissions from nitrogen-rich atmospheres influenced by stellar activity.",
    },
];
