use crate::country::Country;
use metrics::{IntoLabels, Label, SharedString};

/// Holder of multiple [Label] attached to every metric a validator emits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

const COUNTRY: &str = "country";

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// Labels identifying a country validator. Only the alpha-2 code is used, never any
    /// part of a number.
    pub fn for_country(country: Country) -> Self {
        Labels::new(&[(COUNTRY, country.alpha2())])
    }

    /// Clone the actual [Labels] with additional key-value labels
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(additional_labels.iter().map(Label::from));
        Labels(tags)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use crate::country::Country;
    use crate::observability::labels::Labels;
    use metrics::{IntoLabels, Label};

    #[test]
    fn test_country_labels() {
        let labels = Labels::for_country(Country::Germany);
        assert_eq!(labels.into_labels(), vec![Label::new("country", "DE")]);
        assert!(Labels::default().into_labels().is_empty());
    }

    #[test]
    fn test_clone_labels() {
        let labels = Labels::for_country(Country::Austria);

        let labels_2 = labels.clone_with_labels(&[("reason", "date")]);
        let label_list = labels_2.into_labels();
        assert!(label_list.contains(&Label::new("country", "AT")));
        assert!(label_list.contains(&Label::new("reason", "date")));

        let label_list = labels.into_labels();
        assert_eq!(label_list.len(), 1);
    }
}
