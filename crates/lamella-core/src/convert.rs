use lamella_model::entry::{AbsorptionLayer, Contrast, ContrastWithRatio, Entry, Layer, VariantTag};

/// Map an entry into the prescribed variant.
///
/// Shared fields carry over, added reference fields default to empty, and
/// fields absent from the target variant are dropped. Conversions are
/// lossy: a round trip does not restore fields edited in the wider
/// variant. Returns None when no conversion is defined for the pair.
#[must_use]
pub fn convert(entry: &Entry, to: VariantTag) -> Option<Entry> {
    match (entry, to) {
        (Entry::Layer(layer), VariantTag::AbsorptionLayer) => {
            Some(absorb_layer(layer).into())
        }
        (Entry::AbsorptionLayer(layer), VariantTag::Layer) => Some(flatten_layer(layer).into()),
        (Entry::Contrast(contrast), VariantTag::ContrastWithRatio) => {
            Some(widen_contrast(contrast).into())
        }
        (Entry::ContrastWithRatio(contrast), VariantTag::Contrast) => {
            Some(narrow_contrast(contrast).into())
        }
        _ => None,
    }
}

// The plain SLD becomes the real part; the imaginary reference starts
// empty.
fn absorb_layer(layer: &Layer) -> AbsorptionLayer {
    let mut absorbing = AbsorptionLayer::new(layer.name.clone());
    absorbing.thickness = layer.thickness.clone();
    absorbing.sld_real = layer.sld.clone();
    absorbing.roughness = layer.roughness.clone();
    absorbing.hydration = layer.hydration.clone();
    absorbing.hydrate_with = layer.hydrate_with;

    absorbing
}

// The imaginary reference is dropped.
fn flatten_layer(layer: &AbsorptionLayer) -> Layer {
    let mut plain = Layer::new(layer.name.clone());
    plain.thickness = layer.thickness.clone();
    plain.sld = layer.sld_real.clone();
    plain.roughness = layer.roughness.clone();
    plain.hydration = layer.hydration.clone();
    plain.hydrate_with = layer.hydrate_with;

    plain
}

// The domain ratio starts empty; the calculation pass points it at the
// seeded default.
fn widen_contrast(contrast: &Contrast) -> ContrastWithRatio {
    let mut widened = ContrastWithRatio::new(contrast.name.clone());
    widened.data = contrast.data.clone();
    widened.background = contrast.background.clone();
    widened.background_action = contrast.background_action;
    widened.bulk_in = contrast.bulk_in.clone();
    widened.bulk_out = contrast.bulk_out.clone();
    widened.scalefactor = contrast.scalefactor.clone();
    widened.resolution = contrast.resolution.clone();
    widened.model = contrast.model.clone();

    widened
}

// The domain ratio reference is dropped.
fn narrow_contrast(contrast: &ContrastWithRatio) -> Contrast {
    let mut narrowed = Contrast::new(contrast.name.clone());
    narrowed.data = contrast.data.clone();
    narrowed.background = contrast.background.clone();
    narrowed.background_action = contrast.background_action;
    narrowed.bulk_in = contrast.bulk_in.clone();
    narrowed.bulk_out = contrast.bulk_out.clone();
    narrowed.scalefactor = contrast.scalefactor.clone();
    narrowed.resolution = contrast.resolution.clone();
    narrowed.model = contrast.model.clone();

    narrowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_round_trip_is_lossy() {
        let mut layer = Layer::new("Oxide");
        layer.thickness = "Oxide Thickness".into();
        layer.sld = "Oxide SLD".into();
        layer.roughness = "Substrate Roughness".into();

        let Some(Entry::AbsorptionLayer(absorbing)) =
            convert(&layer.clone().into(), VariantTag::AbsorptionLayer)
        else {
            panic!("layer must convert to the absorption variant");
        };
        assert_eq!(absorbing.sld_real, "Oxide SLD");
        assert_eq!(absorbing.sld_imaginary, "");

        let mut edited = absorbing;
        edited.sld_imaginary = "Oxide SLD Imaginary".into();

        let Some(Entry::Layer(back)) = convert(&edited.into(), VariantTag::Layer) else {
            panic!("absorption layer must convert back");
        };
        // The imaginary reference does not survive the round trip.
        assert_eq!(back, layer);
    }

    #[test]
    fn contrast_gains_and_loses_the_ratio() {
        let mut contrast = Contrast::new("D2O");
        contrast.background = "Background 1".into();
        contrast.model = vec!["Oxide".into()];

        let Some(Entry::ContrastWithRatio(widened)) =
            convert(&contrast.clone().into(), VariantTag::ContrastWithRatio)
        else {
            panic!("contrast must convert to the ratio variant");
        };
        assert_eq!(widened.domain_ratio, "");
        assert_eq!(widened.model, contrast.model);

        let mut edited = widened;
        edited.domain_ratio = "Domain Ratio 1".into();

        let Some(Entry::Contrast(back)) = convert(&edited.into(), VariantTag::Contrast) else {
            panic!("ratio contrast must convert back");
        };
        assert_eq!(back, contrast);
    }

    #[test]
    fn unrelated_pairs_do_not_convert() {
        let layer: Entry = Layer::new("L").into();
        assert!(convert(&layer, VariantTag::Contrast).is_none());
        assert!(convert(&layer, VariantTag::Layer).is_none());
    }
}
