// SPDX-License-Identifier: MPL-2.0
//! Query strings sent to the content store.
//!
//! Kept verbatim in one place so the projection shapes stay next to each
//! other; the `domain::records` types mirror these projections field by
//! field. Parameters are passed separately as `$name` values, never
//! interpolated into the strings.

/// Ordered featured set for the home carousel.
pub const FEATURED_IMAGES: &str = r#"*[_type == "featuredImage"] | order(order asc) {
  _id,
  title,
  image {
    asset-> {
      url,
      metadata {
        dimensions,
        exif {
          ISO,
          ExposureTime,
          FNumber,
          FocalLength,
          LensModel,
          Make,
          Model,
          DateTimeOriginal
        }
      }
    }
  },
  caption,
  location,
  order
}"#;

/// Ordered gallery set for one category (`$category`).
pub const GALLERY_IMAGES: &str = r#"*[_type == "galleryImage" && category == $category] | order(order asc) {
  _id,
  title,
  image {
    asset-> {
      url,
      metadata {
        dimensions,
        exif {
          ISO,
          ExposureTime,
          FNumber,
          FocalLength,
          LensModel,
          Make,
          Model,
          DateTimeOriginal
        }
      }
    }
  },
  caption,
  location,
  category,
  order
}"#;

/// The collection currently promoted on the home page, with its stacked
/// preview references resolved.
pub const ACTIVE_COLLECTION: &str = r#"*[_type == "collection" && isActive == true][0] {
  _id,
  title,
  slug,
  subtitle,
  description,
  isActive,
  previewImages[]-> {
    _id,
    title,
    image {
      asset-> {
        url
      }
    },
    order
  }
}"#;

/// One collection by slug (`$slug`), with its full image set resolved in
/// rank order.
pub const COLLECTION_BY_SLUG: &str = r#"*[_type == "collection" && slug.current == $slug][0] {
  _id,
  title,
  slug,
  subtitle,
  description,
  isActive,
  "allImages": *[_type == "galleryImage" && references(^._id)] | order(order asc) {
    _id,
    title,
    image {
      asset-> {
        url,
        metadata {
          dimensions,
          exif {
            ISO,
            ExposureTime,
            FNumber,
            FocalLength,
            LensModel,
            Make,
            Model,
            DateTimeOriginal
          }
        }
      }
    },
    caption,
    location,
    category,
    order
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterized_queries_reference_their_parameters() {
        assert!(GALLERY_IMAGES.contains("$category"));
        assert!(COLLECTION_BY_SLUG.contains("$slug"));
    }

    #[test]
    fn queries_never_inline_user_values() {
        // Parameters go through the query string, so the GROQ text must not
        // contain formatting placeholders.
        for query in [
            FEATURED_IMAGES,
            GALLERY_IMAGES,
            ACTIVE_COLLECTION,
            COLLECTION_BY_SLUG,
        ] {
            assert!(!query.contains("{}"), "query interpolates values: {query}");
        }
    }

    #[test]
    fn image_queries_project_exif_fields() {
        for query in [FEATURED_IMAGES, GALLERY_IMAGES, COLLECTION_BY_SLUG] {
            assert!(query.contains("ExposureTime"));
            assert!(query.contains("DateTimeOriginal"));
            assert!(query.contains("order(order asc)"));
        }
    }

    #[test]
    fn collection_queries_project_previews_and_images() {
        assert!(ACTIVE_COLLECTION.contains("previewImages"));
        assert!(ACTIVE_COLLECTION.contains("isActive == true"));
        assert!(COLLECTION_BY_SLUG.contains("allImages"));
    }
}
