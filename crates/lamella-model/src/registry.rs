use crate::{
    SOURCE_VALUE_SLOTS,
    entry::{Background, Data, Entry, Parameter, Resolution, VariantTag},
    field::Field,
    types::SourceKind,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bootstrap entry names the graph seeds and protects.
pub const SUBSTRATE_ROUGHNESS: &str = "Substrate Roughness";
pub const SIMULATION: &str = "Simulation";
pub const DEFAULT_DOMAIN_RATIO: &str = "Domain Ratio 1";

/// Number of collections in a project graph.
pub const COLLECTION_COUNT: usize = 14;

///
/// CollectionId
///
/// The fixed collections of a project graph, declared in graph order:
/// parameter-like collections first. The engine-input adapter relies on
/// this order for positional parameter assembly, so it is part of the
/// contract.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CollectionId {
    Parameters,
    BackgroundParameters,
    Scalefactors,
    BulkIn,
    BulkOut,
    ResolutionParameters,
    DomainRatios,
    Backgrounds,
    Resolutions,
    CustomFiles,
    Data,
    Layers,
    DomainContrasts,
    Contrasts,
}

impl CollectionId {
    /// Every collection, in graph order.
    pub const ALL: [Self; COLLECTION_COUNT] = [
        Self::Parameters,
        Self::BackgroundParameters,
        Self::Scalefactors,
        Self::BulkIn,
        Self::BulkOut,
        Self::ResolutionParameters,
        Self::DomainRatios,
        Self::Backgrounds,
        Self::Resolutions,
        Self::CustomFiles,
        Self::Data,
        Self::Layers,
        Self::DomainContrasts,
        Self::Contrasts,
    ];

    /// The seven parameter-like collections.
    pub const PARAMETER_LIKE: [Self; 7] = [
        Self::Parameters,
        Self::BackgroundParameters,
        Self::Scalefactors,
        Self::BulkIn,
        Self::BulkOut,
        Self::ResolutionParameters,
        Self::DomainRatios,
    ];

    /// Collections whose entries may carry the protected marker.
    pub const PROTECTED_ELIGIBLE: [Self; 8] = [
        Self::Parameters,
        Self::BackgroundParameters,
        Self::Scalefactors,
        Self::BulkIn,
        Self::BulkOut,
        Self::ResolutionParameters,
        Self::DomainRatios,
        Self::Data,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parameters => "parameters",
            Self::BackgroundParameters => "background_parameters",
            Self::Scalefactors => "scalefactors",
            Self::BulkIn => "bulk_in",
            Self::BulkOut => "bulk_out",
            Self::ResolutionParameters => "resolution_parameters",
            Self::DomainRatios => "domain_ratios",
            Self::Backgrounds => "backgrounds",
            Self::Resolutions => "resolutions",
            Self::CustomFiles => "custom_files",
            Self::Data => "data",
            Self::Layers => "layers",
            Self::DomainContrasts => "domain_contrasts",
            Self::Contrasts => "contrasts",
        }
    }

    /// The variant a collection holds before mode resolution. `layers` and
    /// `contrasts` are refined by the mode resolver.
    #[must_use]
    pub const fn base_variant(self) -> VariantTag {
        match self {
            Self::Parameters
            | Self::BackgroundParameters
            | Self::Scalefactors
            | Self::BulkIn
            | Self::BulkOut
            | Self::ResolutionParameters
            | Self::DomainRatios => VariantTag::Parameter,
            Self::Backgrounds => VariantTag::Background,
            Self::Resolutions => VariantTag::Resolution,
            Self::CustomFiles => VariantTag::CustomFile,
            Self::Data => VariantTag::Data,
            Self::Layers => VariantTag::Layer,
            Self::DomainContrasts => VariantTag::DomainContrast,
            Self::Contrasts => VariantTag::Contrast,
        }
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---- reference declarations --------------------------------------------

/// The reference slots on backgrounds and resolutions.
pub const VALUE_SLOTS: [Field; SOURCE_VALUE_SLOTS] = [
    Field::Value1,
    Field::Value2,
    Field::Value3,
    Field::Value4,
    Field::Value5,
];

/// Declared reference targets per variant, in validation order.
///
/// `hydration` is deliberately absent from the layer tables: renames
/// propagate through it, but its value is never cross-checked.
#[must_use]
pub const fn reference_targets(tag: VariantTag) -> &'static [(Field, CollectionId)] {
    match tag {
        VariantTag::Layer => &[
            (Field::Thickness, CollectionId::Parameters),
            (Field::Sld, CollectionId::Parameters),
            (Field::Roughness, CollectionId::Parameters),
        ],
        VariantTag::AbsorptionLayer => &[
            (Field::Thickness, CollectionId::Parameters),
            (Field::SldReal, CollectionId::Parameters),
            (Field::SldImaginary, CollectionId::Parameters),
            (Field::Roughness, CollectionId::Parameters),
        ],
        VariantTag::Contrast => &[
            (Field::Data, CollectionId::Data),
            (Field::Background, CollectionId::Backgrounds),
            (Field::BulkIn, CollectionId::BulkIn),
            (Field::BulkOut, CollectionId::BulkOut),
            (Field::Scalefactor, CollectionId::Scalefactors),
            (Field::Resolution, CollectionId::Resolutions),
        ],
        VariantTag::ContrastWithRatio => &[
            (Field::Data, CollectionId::Data),
            (Field::Background, CollectionId::Backgrounds),
            (Field::BulkIn, CollectionId::BulkIn),
            (Field::BulkOut, CollectionId::BulkOut),
            (Field::Scalefactor, CollectionId::Scalefactors),
            (Field::Resolution, CollectionId::Resolutions),
            (Field::DomainRatio, CollectionId::DomainRatios),
        ],
        _ => &[],
    }
}

/// Which collection a background/resolution reference slot resolves
/// against, given the entry's source kind. None means the kind has no
/// slot support.
#[must_use]
pub const fn source_slot_target(id: CollectionId, kind: SourceKind) -> Option<CollectionId> {
    match (id, kind) {
        (CollectionId::Backgrounds, SourceKind::Constant) => {
            Some(CollectionId::BackgroundParameters)
        }
        (CollectionId::Resolutions, SourceKind::Constant) => {
            Some(CollectionId::ResolutionParameters)
        }
        (CollectionId::Backgrounds | CollectionId::Resolutions, SourceKind::Data) => {
            Some(CollectionId::Data)
        }
        _ => None,
    }
}

///
/// Uses
///
/// Registers, per source collection, the single consumer collection and
/// the consumer fields rewritten when source entries are renamed.
///

pub struct Uses {
    pub source: CollectionId,
    pub consumer: CollectionId,
    pub fields: &'static [Field],
}

/// Rename-propagation registrations, in propagation order. Model lists
/// are not registered: a rename that breaks one surfaces as a reference
/// violation instead.
pub const RENAME_USES: &[Uses] = &[
    Uses {
        source: CollectionId::BackgroundParameters,
        consumer: CollectionId::Backgrounds,
        fields: &VALUE_SLOTS,
    },
    Uses {
        source: CollectionId::ResolutionParameters,
        consumer: CollectionId::Resolutions,
        fields: &VALUE_SLOTS,
    },
    Uses {
        source: CollectionId::Parameters,
        consumer: CollectionId::Layers,
        fields: &[
            Field::Thickness,
            Field::Sld,
            Field::SldReal,
            Field::SldImaginary,
            Field::Roughness,
            Field::Hydration,
        ],
    },
    Uses {
        source: CollectionId::Data,
        consumer: CollectionId::Contrasts,
        fields: &[Field::Data],
    },
    Uses {
        source: CollectionId::Backgrounds,
        consumer: CollectionId::Contrasts,
        fields: &[Field::Background],
    },
    Uses {
        source: CollectionId::BulkIn,
        consumer: CollectionId::Contrasts,
        fields: &[Field::BulkIn],
    },
    Uses {
        source: CollectionId::BulkOut,
        consumer: CollectionId::Contrasts,
        fields: &[Field::BulkOut],
    },
    Uses {
        source: CollectionId::Scalefactors,
        consumer: CollectionId::Contrasts,
        fields: &[Field::Scalefactor],
    },
    Uses {
        source: CollectionId::DomainRatios,
        consumer: CollectionId::Contrasts,
        fields: &[Field::DomainRatio],
    },
    Uses {
        source: CollectionId::Resolutions,
        consumer: CollectionId::Contrasts,
        fields: &[Field::Resolution],
    },
];

// ---- bootstrap entries --------------------------------------------------

/// The protected substrate roughness parameter every graph carries.
#[must_use]
pub fn substrate_roughness() -> Parameter {
    Parameter::new(SUBSTRATE_ROUGHNESS)
        .with_range(1.0, 3.0, 5.0)
        .with_fit(true)
        .into_protected()
}

/// The protected simulation data entry every graph carries.
#[must_use]
pub fn simulation_data() -> Data {
    Data::new(SIMULATION)
        .with_simulation_range(vec![0.005, 0.7])
        .into_protected()
}

/// The domain ratio seeded when a calculation switches to domains.
#[must_use]
pub fn default_domain_ratio() -> Parameter {
    Parameter::new(DEFAULT_DOMAIN_RATIO).with_range(0.4, 0.5, 0.6)
}

/// Default bootstrap entries for a freshly constructed graph.
#[must_use]
pub fn bootstrap(id: CollectionId) -> Vec<Entry> {
    match id {
        CollectionId::Parameters => vec![substrate_roughness().into()],
        CollectionId::BackgroundParameters => vec![
            Parameter::new("Background Param 1")
                .with_range(1e-7, 1e-6, 1e-5)
                .into(),
        ],
        CollectionId::Scalefactors => vec![
            Parameter::new("Scalefactor 1")
                .with_range(0.02, 0.23, 0.25)
                .into(),
        ],
        CollectionId::BulkIn => {
            vec![Parameter::new("SLD Air").with_range(0.0, 0.0, 0.0).into()]
        }
        CollectionId::BulkOut => vec![
            Parameter::new("SLD D2O")
                .with_range(6.2e-6, 6.35e-6, 6.35e-6)
                .into(),
        ],
        CollectionId::ResolutionParameters => vec![
            Parameter::new("Resolution Param 1")
                .with_range(0.01, 0.03, 0.05)
                .into(),
        ],
        CollectionId::DomainRatios => vec![default_domain_ratio().into()],
        CollectionId::Backgrounds => {
            vec![Background::constant("Background 1", "Background Param 1").into()]
        }
        CollectionId::Resolutions => {
            vec![Resolution::constant("Resolution 1", "Resolution Param 1").into()]
        }
        CollectionId::Data => vec![simulation_data().into()],
        CollectionId::CustomFiles
        | CollectionId::Layers
        | CollectionId::DomainContrasts
        | CollectionId::Contrasts => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_order_starts_with_parameter_collections() {
        for id in CollectionId::PARAMETER_LIKE {
            assert!(
                id.index() < CollectionId::PARAMETER_LIKE.len(),
                "{id} is not in the leading parameter block"
            );
            assert_eq!(id.base_variant(), VariantTag::Parameter);
        }
    }

    #[test]
    fn rename_fields_exist_on_their_consumer_variants() {
        for uses in RENAME_USES {
            let samples = crate::entry::tests::sample_entries(uses.consumer);
            for entry in samples {
                for field in uses.fields {
                    // Every registered field must be text-valued wherever
                    // the consumer variant carries it.
                    if let Some(value) = entry.get(*field) {
                        assert!(
                            value.as_text().is_some(),
                            "{field} on {} is not text-valued",
                            uses.consumer
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn bootstrap_references_resolve_within_bootstrap() {
        let backgrounds = bootstrap(CollectionId::Backgrounds);
        let sources = bootstrap(CollectionId::BackgroundParameters);
        let Entry::Background(background) = &backgrounds[0] else {
            panic!("bootstrap backgrounds must hold Background entries");
        };
        assert!(sources.iter().any(|entry| entry.name() == background.value_1));
    }

    #[test]
    fn slot_targets_depend_on_kind() {
        assert_eq!(
            source_slot_target(CollectionId::Backgrounds, SourceKind::Constant),
            Some(CollectionId::BackgroundParameters)
        );
        assert_eq!(
            source_slot_target(CollectionId::Resolutions, SourceKind::Data),
            Some(CollectionId::Data)
        );
        assert_eq!(
            source_slot_target(CollectionId::Backgrounds, SourceKind::Function),
            None
        );
    }
}
