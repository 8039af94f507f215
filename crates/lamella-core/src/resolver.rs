use lamella_model::{
    entry::VariantTag,
    registry::CollectionId,
    types::{Calculation, LayerModel},
};

///
/// ModeFlags
///
/// The structural mode flags of a project graph. Shape resolution is a
/// pure function of this value: re-deriving it after every mutation rules
/// out hidden staleness.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ModeFlags {
    pub calculation: Calculation,
    pub model: LayerModel,
    pub absorption: bool,
}

impl ModeFlags {
    /// The variant a collection holds under these flags.
    #[must_use]
    pub const fn variant_for(self, id: CollectionId) -> VariantTag {
        match id {
            CollectionId::Layers => {
                if self.absorption {
                    VariantTag::AbsorptionLayer
                } else {
                    VariantTag::Layer
                }
            }
            CollectionId::Contrasts => {
                if matches!(self.calculation, Calculation::Domains) {
                    VariantTag::ContrastWithRatio
                } else {
                    VariantTag::Contrast
                }
            }
            _ => id.base_variant(),
        }
    }

    /// Whether a collection must hold zero entries under these flags.
    #[must_use]
    pub const fn forced_empty(self, id: CollectionId) -> bool {
        let domains = matches!(self.calculation, Calculation::Domains);
        let standard = matches!(self.model, LayerModel::StandardLayers);

        match id {
            CollectionId::Layers => !standard,
            CollectionId::DomainRatios => !domains,
            CollectionId::DomainContrasts => !(domains && standard),
            _ => false,
        }
    }

    /// The collection contrast model lists draw their names from.
    #[must_use]
    pub const fn model_source(self) -> CollectionId {
        match (self.model, self.calculation) {
            (LayerModel::StandardLayers, Calculation::Domains) => CollectionId::DomainContrasts,
            (LayerModel::StandardLayers, _) => CollectionId::Layers,
            _ => CollectionId::CustomFiles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn flags(calculation: Calculation, model: LayerModel, absorption: bool) -> ModeFlags {
        ModeFlags {
            calculation,
            model,
            absorption,
        }
    }

    #[test]
    fn layer_variant_follows_absorption() {
        let plain = flags(Calculation::NonPolarised, LayerModel::StandardLayers, false);
        let absorbing = flags(Calculation::NonPolarised, LayerModel::StandardLayers, true);

        assert_eq!(plain.variant_for(CollectionId::Layers), VariantTag::Layer);
        assert_eq!(
            absorbing.variant_for(CollectionId::Layers),
            VariantTag::AbsorptionLayer
        );
    }

    #[test]
    fn contrast_variant_follows_calculation() {
        let plain = flags(Calculation::NonPolarised, LayerModel::StandardLayers, false);
        let domains = flags(Calculation::Domains, LayerModel::StandardLayers, false);

        assert_eq!(
            plain.variant_for(CollectionId::Contrasts),
            VariantTag::Contrast
        );
        assert_eq!(
            domains.variant_for(CollectionId::Contrasts),
            VariantTag::ContrastWithRatio
        );
    }

    #[test]
    fn forced_empty_matrix() {
        let standard = flags(Calculation::NonPolarised, LayerModel::StandardLayers, false);
        assert!(!standard.forced_empty(CollectionId::Layers));
        assert!(standard.forced_empty(CollectionId::DomainRatios));
        assert!(standard.forced_empty(CollectionId::DomainContrasts));

        let domains = flags(Calculation::Domains, LayerModel::StandardLayers, false);
        assert!(!domains.forced_empty(CollectionId::DomainRatios));
        assert!(!domains.forced_empty(CollectionId::DomainContrasts));

        let custom = flags(Calculation::Domains, LayerModel::CustomFiles, false);
        assert!(custom.forced_empty(CollectionId::Layers));
        assert!(custom.forced_empty(CollectionId::DomainContrasts));
        assert!(!custom.forced_empty(CollectionId::DomainRatios));
    }

    #[test]
    fn model_source_matrix() {
        assert_eq!(
            flags(Calculation::NonPolarised, LayerModel::StandardLayers, false).model_source(),
            CollectionId::Layers
        );
        assert_eq!(
            flags(Calculation::Domains, LayerModel::StandardLayers, false).model_source(),
            CollectionId::DomainContrasts
        );
        assert_eq!(
            flags(Calculation::NonPolarised, LayerModel::CustomXy, false).model_source(),
            CollectionId::CustomFiles
        );
        assert_eq!(
            flags(Calculation::Domains, LayerModel::CustomFiles, false).model_source(),
            CollectionId::CustomFiles
        );
    }
}
