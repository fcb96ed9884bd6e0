use timebox_core::model::TimeLimitFieldset;

#[derive(Clone, Debug, PartialEq)]
pub struct OptionVm {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectVm {
    pub name: String,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LimitFieldsetVm {
    pub label: Option<String>,
    pub selects: Vec<SelectVm>,
}

#[must_use]
pub fn map_limit_fieldset(fieldset: &TimeLimitFieldset) -> LimitFieldsetVm {
    LimitFieldsetVm {
        label: fieldset.label(),
        selects: fieldset
            .fields()
            .iter()
            .map(|field| SelectVm {
                name: field.name().to_string(),
                options: field
                    .options()
                    .iter()
                    .map(|option| OptionVm {
                        value: option.value().to_string(),
                        label: option.label().to_string(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
