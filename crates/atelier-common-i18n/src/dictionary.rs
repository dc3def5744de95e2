// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static UI dictionaries.
//!
//! Each section is a struct rather than a string map, so a locale that forgot
//! a label fails to compile instead of rendering a blank link.

use serde::Serialize;

use crate::locale::Locale;

/// All UI strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dictionary {
	pub nav: NavLabels,
	pub footer: FooterLabels,
	pub home: HomeLabels,
	pub shop: ShopLabels,
	pub custom_build: CustomBuildLabels,
	pub checkout: CheckoutLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLabels {
	pub home: &'static str,
	pub shop: &'static str,
	pub custom_build: &'static str,
	pub about: &'static str,
	pub contact: &'static str,
	pub cart: &'static str,
	/// Label of the link that switches to the other language.
	pub switch_language: &'static str,
}

impl NavLabels {
	/// `(key, label)` pairs in menu order.
	pub fn entries(&self) -> [(&'static str, &'static str); 7] {
		[
			("home", self.home),
			("shop", self.shop),
			("custom_build", self.custom_build),
			("about", self.about),
			("contact", self.contact),
			("cart", self.cart),
			("switch_language", self.switch_language),
		]
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLabels {
	pub tagline: &'static str,
	pub address: &'static str,
	pub contact: &'static str,
	pub rights: &'static str,
	pub privacy: &'static str,
	pub terms: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeLabels {
	pub hero_title: &'static str,
	pub hero_subtitle: &'static str,
	pub categories_title: &'static str,
	pub cta_custom_build: &'static str,
	pub cta_shop: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopLabels {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub from_price: &'static str,
	pub view_category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomBuildLabels {
	pub title: &'static str,
	pub intro: &'static str,
	pub choose_category: &'static str,
	pub start: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutLabels {
	pub pay: &'static str,
	pub success_title: &'static str,
	pub success_message: &'static str,
	pub cancel_title: &'static str,
	pub cancel_message: &'static str,
}

static EN: Dictionary = Dictionary {
	nav: NavLabels {
		home: "Home",
		shop: "Shop",
		custom_build: "Build your watch",
		about: "About",
		contact: "Contact",
		cart: "Cart",
		switch_language: "Français",
	},
	footer: FooterLabels {
		tagline: "Bespoke watches, assembled by hand in Montréal.",
		address: "Montréal, Québec, Canada",
		contact: "Contact the studio",
		rights: "All rights reserved.",
		privacy: "Privacy policy",
		terms: "Terms of sale",
	},
	home: HomeLabels {
		hero_title: "Your watch, built to order",
		hero_subtitle: "Choose a case, a dial and a strap. We assemble and regulate every piece in our studio.",
		categories_title: "Collections",
		cta_custom_build: "Start your build",
		cta_shop: "Browse the shop",
	},
	shop: ShopLabels {
		title: "Shop",
		subtitle: "Ready-to-wear pieces from the studio.",
		from_price: "From",
		view_category: "View collection",
	},
	custom_build: CustomBuildLabels {
		title: "Build your own watch",
		intro: "Start from a collection, then pick every component.",
		choose_category: "Choose a collection",
		start: "Begin",
	},
	checkout: CheckoutLabels {
		pay: "Proceed to payment",
		success_title: "Thank you for your order",
		success_message: "A confirmation email is on its way. We will contact you when your watch enters assembly.",
		cancel_title: "Payment cancelled",
		cancel_message: "Your card was not charged. Your selection is still waiting for you.",
	},
};

static FR: Dictionary = Dictionary {
	nav: NavLabels {
		home: "Accueil",
		shop: "Boutique",
		custom_build: "Créez votre montre",
		about: "À propos",
		contact: "Contact",
		cart: "Panier",
		switch_language: "English",
	},
	footer: FooterLabels {
		tagline: "Montres sur mesure, assemblées à la main à Montréal.",
		address: "Montréal, Québec, Canada",
		contact: "Écrire à l'atelier",
		rights: "Tous droits réservés.",
		privacy: "Politique de confidentialité",
		terms: "Conditions de vente",
	},
	home: HomeLabels {
		hero_title: "Votre montre, fabriquée sur commande",
		hero_subtitle: "Choisissez un boîtier, un cadran et un bracelet. Chaque pièce est assemblée et réglée dans notre atelier.",
		categories_title: "Collections",
		cta_custom_build: "Commencer votre montre",
		cta_shop: "Voir la boutique",
	},
	shop: ShopLabels {
		title: "Boutique",
		subtitle: "Pièces prêtes à porter de l'atelier.",
		from_price: "À partir de",
		view_category: "Voir la collection",
	},
	custom_build: CustomBuildLabels {
		title: "Créez votre propre montre",
		intro: "Partez d'une collection, puis choisissez chaque composant.",
		choose_category: "Choisissez une collection",
		start: "Commencer",
	},
	checkout: CheckoutLabels {
		pay: "Procéder au paiement",
		success_title: "Merci pour votre commande",
		success_message: "Un courriel de confirmation est en route. Nous vous contacterons lorsque votre montre entrera en assemblage.",
		cancel_title: "Paiement annulé",
		cancel_message: "Votre carte n'a pas été débitée. Votre sélection vous attend toujours.",
	},
};

/// Resolve the dictionary for a locale.
pub fn dictionary(locale: Locale) -> &'static Dictionary {
	match locale {
		Locale::En => &EN,
		Locale::Fr => &FR,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_locale_has_non_empty_navigation_labels() {
		for locale in Locale::ALL {
			for (key, label) in dictionary(locale).nav.entries() {
				assert!(!label.trim().is_empty(), "{locale} nav.{key} is empty");
			}
		}
	}

	#[test]
	fn every_locale_has_non_empty_labels_in_all_sections() {
		for locale in Locale::ALL {
			let json = serde_json::to_value(dictionary(locale)).unwrap();
			for (section, labels) in json.as_object().unwrap() {
				for (key, value) in labels.as_object().unwrap() {
					let text = value.as_str().unwrap();
					assert!(!text.trim().is_empty(), "{locale} {section}.{key} is empty");
				}
			}
		}
	}

	#[test]
	fn locales_resolve_to_distinct_dictionaries() {
		assert_eq!(dictionary(Locale::En).nav.shop, "Shop");
		assert_eq!(dictionary(Locale::Fr).nav.shop, "Boutique");
		assert_ne!(dictionary(Locale::En), dictionary(Locale::Fr));
	}

	#[test]
	fn language_switch_points_at_the_other_language() {
		assert_eq!(
			dictionary(Locale::En).nav.switch_language,
			Locale::Fr.info().native_name
		);
		assert_eq!(
			dictionary(Locale::Fr).nav.switch_language,
			Locale::En.info().native_name
		);
	}
}
