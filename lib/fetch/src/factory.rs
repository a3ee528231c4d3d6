use crate::FetchError;
use oxrdf::{Dataset, NamedNode};
use simple_rdf::{Context, Simple};
use std::error::Error;
use std::sync::Arc;

/// A factory function building the decoded graph object from a
/// `(context, identifier, dataset)` triple.
pub type SimpleFactory = Arc<
    dyn Fn(
            Context,
            NamedNode,
            Dataset,
        ) -> Result<Simple, Box<dyn Error + Send + Sync + 'static>>
        + Send
        + Sync,
>;

/// A constructor for the decoded graph object.
///
/// The default implementation is [`DefaultConstructor`]; callers that need a
/// differently initialized object implement this trait or, for one-off cases,
/// pass a [`SimpleFactory`] closure instead.
pub trait ConstructSimple: Send + Sync {
    /// Builds the graph object from a `(context, identifier, dataset)` triple.
    fn construct(
        &self,
        context: Context,
        identifier: NamedNode,
        dataset: Dataset,
    ) -> Result<Simple, Box<dyn Error + Send + Sync + 'static>>;
}

/// Constructs the decoded object with [`Simple::from_dataset`].
pub struct DefaultConstructor;

impl ConstructSimple for DefaultConstructor {
    fn construct(
        &self,
        context: Context,
        identifier: NamedNode,
        dataset: Dataset,
    ) -> Result<Simple, Box<dyn Error + Send + Sync + 'static>> {
        Ok(Simple::from_dataset(context, identifier, dataset))
    }
}

/// How the decoded object is built, selected at call time: a factory in the
/// options wins over a constructor in the options, which wins over the
/// client's constructor.
pub(crate) enum BuildStrategy {
    Factory(SimpleFactory),
    Constructor(Arc<dyn ConstructSimple>),
}

impl BuildStrategy {
    pub(crate) fn build(
        &self,
        context: Context,
        identifier: NamedNode,
        dataset: Dataset,
    ) -> Result<Simple, FetchError> {
        match self {
            Self::Factory(factory) => {
                factory(context, identifier, dataset).map_err(FetchError::Construction)
            }
            Self::Constructor(constructor) => constructor
                .construct(context, identifier, dataset)
                .map_err(FetchError::Construction),
        }
    }
}
