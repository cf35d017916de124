//! Utility macros.

/// Implements a binary operator for every combination of owned and borrowed
/// operands. The generic parameters of the implementations are given in
/// brackets.
macro_rules! impl_binop {
    (
        $op:ident, $method:ident, [$($generics:tt)*],
        $tl:ty, $tr:ty, $to:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, [$($generics:tt)*], $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<$($generics)*> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    (
        $op:ident, $method:ident, [$($generics:tt)*],
        $tl:ty, $tr:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<$($generics)*> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ([$($generics:tt)*], $t:ty, $e:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<$($generics)*> ::approx::AbsDiffEq for $t {
            type Epsilon = $e;

            fn default_epsilon() -> Self::Epsilon {
                <$e as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    (
        [$($generics:tt)*], $t:ty, $e:ty,
        |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block
    ) => {
        impl<$($generics)*> ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <$e as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

/// Implements `element * vector` for concrete element types.
macro_rules! impl_scalar_left_mul {
    ($vector:ident, $($t:ty),+) => {
        $(
            impl_binop!(
                Mul, mul, [const N: usize, A: $crate::storage::SelectStorage<$t, N>],
                $t, $vector<$t, N, A>, $vector<$t, N, A>,
                |a, b| { b * *a }
            );
        )+
    };
}

/// Implements what real and integer vectors have in common: construction,
/// component access, lane-wise arithmetic, comparison and formatting.
///
/// Every operation keeps the padding lanes of the storage at zero. Division
/// replaces the padding of the divisor with one, and scalar operands are
/// broadcast with zero (multiplication) or one (division) in the padding.
macro_rules! impl_vector_common {
    ($vector:ident, $bound:ident) => {
        impl<T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>> $vector<T, N, A> {
            #[inline]
            pub(crate) fn wrap(components: A::Repr) -> Self {
                Self { components }
            }

            /// Broadcasts `value` to the components and `padding` to the
            /// padding lanes.
            #[inline]
            pub(crate) fn padded_splat(value: T, padding: T) -> A::Repr {
                let mut components = <A::Repr as $crate::dispatch::Lanes<T>>::splat(value);
                for lane in N..<A::Repr as $crate::dispatch::Lanes<T>>::LANES {
                    $crate::dispatch::Lanes::set_lane(&mut components, lane, padding);
                }
                components
            }

            /// The storage of `self` with padding lanes set to one, for use
            /// as a divisor.
            #[inline]
            fn divisor(&self) -> A::Repr {
                let mut components = self.components;
                for lane in N..<A::Repr as $crate::dispatch::Lanes<T>>::LANES {
                    $crate::dispatch::Lanes::set_lane(&mut components, lane, T::ONE);
                }
                components
            }

            /// Creates a vector from the given storage, clearing its padding
            /// lanes.
            #[inline]
            pub fn from_components(mut components: A::Repr) -> Self {
                for lane in N..<A::Repr as $crate::dispatch::Lanes<T>>::LANES {
                    $crate::dispatch::Lanes::set_lane(&mut components, lane, T::ZERO);
                }
                Self::wrap(components)
            }

            /// Returns the storage of the vector, padding lanes included.
            #[inline]
            pub fn components(&self) -> &A::Repr {
                &self.components
            }

            /// Creates a vector with all components equal to zero.
            #[inline]
            pub fn zeros() -> Self {
                Self::wrap(<A::Repr as $crate::dispatch::Lanes<T>>::zeros())
            }

            /// Creates a vector with all components equal to the given value.
            #[inline]
            pub fn same(value: T) -> Self {
                Self::wrap(Self::padded_splat(value, T::ZERO))
            }

            /// Creates a vector whose component `i` is `f(i)`.
            #[inline]
            pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
                Self::from_array(::std::array::from_fn(f))
            }

            #[inline]
            pub fn from_array(components: [T; N]) -> Self {
                Self::wrap(<A::Repr as $crate::dispatch::Lanes<T>>::from_slice(
                    &components,
                ))
            }

            /// Creates a vector from a slice of components.
            ///
            /// # Panics
            /// If the length of the slice is not `N`.
            #[inline]
            pub fn from_slice(components: &[T]) -> Self {
                assert_eq!(
                    components.len(),
                    N,
                    "expected {N} components, got {}",
                    components.len()
                );
                Self::wrap(<A::Repr as $crate::dispatch::Lanes<T>>::from_slice(
                    components,
                ))
            }

            #[inline]
            pub fn to_array(&self) -> [T; N] {
                ::std::array::from_fn(|i| self.as_slice()[i])
            }

            /// Returns the components (without padding) as a slice.
            #[inline]
            pub fn as_slice(&self) -> &[T] {
                &$crate::dispatch::Lanes::as_slice(&self.components)[..N]
            }

            /// Returns the components (without padding) as a mutable slice.
            #[inline]
            pub fn as_mut_slice(&mut self) -> &mut [T] {
                &mut $crate::dispatch::Lanes::as_mut_slice(&mut self.components)[..N]
            }

            /// # Panics
            /// If `index` is not smaller than `N`.
            #[inline]
            pub fn component(&self, index: usize) -> T {
                self.as_slice()[index]
            }

            /// # Panics
            /// If `index` is not smaller than `N`.
            #[inline]
            pub fn set_component(&mut self, index: usize, value: T) {
                self.as_mut_slice()[index] = value;
            }

            /// Overwrites all components.
            #[inline]
            pub fn set(&mut self, components: [T; N]) -> &mut Self {
                *self = Self::from_array(components);
                self
            }

            /// Computes the dot product of this vector with another.
            #[inline]
            pub fn dot(&self, other: &Self) -> T {
                <A::Repr as $crate::dispatch::DotPolicy<T>>::map(&self.components, &other.components)
            }

            /// Computes the squared magnitude (dot product with itself).
            #[inline]
            pub fn sqr_magnitude(&self) -> T {
                self.dot(self)
            }

            /// Computes the sum of the components.
            #[inline]
            pub fn component_sum(&self) -> T {
                <A::Repr as $crate::dispatch::HorizontalSumPolicy<T>>::map(&self.components)
            }

            /// Computes the component-wise product with another vector.
            #[inline]
            pub fn component_mul(&self, other: &Self) -> Self {
                Self::wrap(<A::Repr as $crate::dispatch::MulPolicy<T>>::map(
                    &self.components,
                    &other.components,
                ))
            }

            /// Computes the component-wise quotient with another vector.
            ///
            /// For integer vectors, this panics if any component of `other`
            /// is zero.
            #[inline]
            pub fn component_div(&self, other: &Self) -> Self {
                Self::wrap(<A::Repr as $crate::dispatch::DivPolicy<T>>::map(
                    &self.components,
                    &other.divisor(),
                ))
            }

            /// Computes the component-wise minimum with another vector.
            #[inline]
            pub fn component_min(&self, other: &Self) -> Self {
                Self::wrap(<A::Repr as $crate::dispatch::MinPolicy<T>>::map(
                    &self.components,
                    &other.components,
                ))
            }

            /// Replaces each component with the minimum of it and the
            /// corresponding component of `other`.
            #[inline]
            pub fn component_min_assign(&mut self, other: &Self) -> &mut Self {
                <A::Repr as $crate::dispatch::MinPolicy<T>>::map_assign(
                    &mut self.components,
                    &other.components,
                );
                self
            }

            /// Computes the component-wise maximum with another vector.
            #[inline]
            pub fn component_max(&self, other: &Self) -> Self {
                Self::wrap(<A::Repr as $crate::dispatch::MaxPolicy<T>>::map(
                    &self.components,
                    &other.components,
                ))
            }

            /// Replaces each component with the maximum of it and the
            /// corresponding component of `other`.
            #[inline]
            pub fn component_max_assign(&mut self, other: &Self) -> &mut Self {
                <A::Repr as $crate::dispatch::MaxPolicy<T>>::map_assign(
                    &mut self.components,
                    &other.components,
                );
                self
            }

            /// Computes the component-wise absolute value.
            #[inline]
            pub fn component_abs(&self) -> Self {
                Self::wrap(<A::Repr as $crate::dispatch::AbsPolicy<T>>::map(
                    &self.components,
                ))
            }

            /// Replaces each component with its absolute value.
            #[inline]
            pub fn component_abs_assign(&mut self) -> &mut Self {
                <A::Repr as $crate::dispatch::AbsPolicy<T>>::map_assign(&mut self.components);
                self
            }

            /// Maps each component to -1, 0 or 1 according to its sign.
            #[inline]
            pub fn signum(&self) -> Self {
                self.mapped($crate::num::Scalar::lane_signum)
            }

            #[inline]
            pub fn signum_assign(&mut self) -> &mut Self {
                for component in self.as_mut_slice() {
                    *component = $crate::num::Scalar::lane_signum(*component);
                }
                self
            }

            /// Returns the smallest component.
            #[inline]
            pub fn min_component(&self) -> T {
                let (first, rest) = self.as_slice().split_at(1);
                rest.iter()
                    .fold(first[0], |min, &c| $crate::num::Scalar::lane_min(min, c))
            }

            /// Returns the largest component.
            #[inline]
            pub fn max_component(&self) -> T {
                let (first, rest) = self.as_slice().split_at(1);
                rest.iter()
                    .fold(first[0], |max, &c| $crate::num::Scalar::lane_max(max, c))
            }

            /// Whether every component is within `threshold` of the
            /// corresponding component of `other`.
            #[inline]
            pub fn equals(&self, other: &Self, threshold: T) -> bool {
                <A::Repr as $crate::dispatch::EqualsPolicy<T>>::map(
                    &self.components,
                    &other.components,
                    threshold,
                )
            }

            /// Creates a new vector by applying the given closure to each
            /// component.
            #[inline]
            pub fn mapped(&self, f: impl Fn(T) -> T) -> Self {
                Self::from_fn(|i| f(self.as_slice()[i]))
            }

            /// Converts the vector to another alignment.
            #[inline]
            pub fn realigned<B: $crate::storage::SelectStorage<T, N>>(&self) -> $vector<T, N, B> {
                $vector::from_slice(self.as_slice())
            }

            /// Converts the vector to aligned storage.
            #[inline]
            pub fn aligned(&self) -> $vector<T, N, $crate::storage::Aligned>
            where
                $crate::storage::Aligned: $crate::storage::SelectStorage<T, N>,
            {
                self.realigned()
            }

            /// Converts the vector to unaligned storage.
            #[inline]
            pub fn unaligned(&self) -> $vector<T, N, $crate::storage::Unaligned>
            where
                $crate::storage::Unaligned: $crate::storage::SelectStorage<T, N>,
            {
                self.realigned()
            }
        }

        impl<T: $bound + $crate::num::Signed, const N: usize, A: $crate::storage::SelectStorage<T, N>>
            $vector<T, N, A>
        {
            /// Computes the negated vector.
            #[inline]
            pub fn negated(&self) -> Self {
                Self::wrap(<A::Repr as $crate::dispatch::NegatePolicy<T>>::map(
                    &self.components,
                ))
            }

            /// Negates the vector in place.
            #[inline]
            pub fn negate(&mut self) -> &mut Self {
                <A::Repr as $crate::dispatch::NegatePolicy<T>>::map_assign(&mut self.components);
                self
            }
        }

        impl<T: $bound, A: $crate::storage::SelectStorage<T, 2>> $vector<T, 2, A> {
            /// Creates a new vector with the given components.
            #[inline]
            pub fn new(x: T, y: T) -> Self {
                Self::from_array([x, y])
            }

            #[inline]
            pub fn unit_x() -> Self {
                Self::new(T::ONE, T::ZERO)
            }

            #[inline]
            pub fn unit_y() -> Self {
                Self::new(T::ZERO, T::ONE)
            }

            #[inline]
            pub fn x(&self) -> T {
                self.component(0)
            }

            #[inline]
            pub fn y(&self) -> T {
                self.component(1)
            }

            #[inline]
            pub fn x_mut(&mut self) -> &mut T {
                &mut self.as_mut_slice()[0]
            }

            #[inline]
            pub fn y_mut(&mut self) -> &mut T {
                &mut self.as_mut_slice()[1]
            }

            #[inline]
            pub fn set_x(&mut self, x: T) {
                self.set_component(0, x);
            }

            #[inline]
            pub fn set_y(&mut self, y: T) {
                self.set_component(1, y);
            }

            /// Creates a 3D vector from this vector and the given third
            /// component.
            #[inline]
            pub fn extended(&self, z: T) -> $vector<T, 3, A>
            where
                A: $crate::storage::SelectStorage<T, 3>,
            {
                $vector::<T, 3, A>::new(self.x(), self.y(), z)
            }
        }

        impl<T: $bound, A: $crate::storage::SelectStorage<T, 3>> $vector<T, 3, A> {
            /// Creates a new vector with the given components.
            #[inline]
            pub fn new(x: T, y: T, z: T) -> Self {
                Self::from_array([x, y, z])
            }

            #[inline]
            pub fn unit_x() -> Self {
                Self::new(T::ONE, T::ZERO, T::ZERO)
            }

            #[inline]
            pub fn unit_y() -> Self {
                Self::new(T::ZERO, T::ONE, T::ZERO)
            }

            #[inline]
            pub fn unit_z() -> Self {
                Self::new(T::ZERO, T::ZERO, T::ONE)
            }

            #[inline]
            pub fn x(&self) -> T {
                self.component(0)
            }

            #[inline]
            pub fn y(&self) -> T {
                self.component(1)
            }

            #[inline]
            pub fn z(&self) -> T {
                self.component(2)
            }

            #[inline]
            pub fn x_mut(&mut self) -> &mut T {
                &mut self.as_mut_slice()[0]
            }

            #[inline]
            pub fn y_mut(&mut self) -> &mut T {
                &mut self.as_mut_slice()[1]
            }

            #[inline]
            pub fn z_mut(&mut self) -> &mut T {
                &mut self.as_mut_slice()[2]
            }

            #[inline]
            pub fn set_x(&mut self, x: T) {
                self.set_component(0, x);
            }

            #[inline]
            pub fn set_y(&mut self, y: T) {
                self.set_component(1, y);
            }

            #[inline]
            pub fn set_z(&mut self, z: T) {
                self.set_component(2, z);
            }

            /// Returns the 2D vector with the x- and y-components.
            #[inline]
            pub fn xy(&self) -> $vector<T, 2, A>
            where
                A: $crate::storage::SelectStorage<T, 2>,
            {
                $vector::<T, 2, A>::new(self.x(), self.y())
            }

            /// Creates a 4D vector from this vector and the given fourth
            /// component.
            #[inline]
            pub fn extended(&self, w: T) -> $vector<T, 4, A>
            where
                A: $crate::storage::SelectStorage<T, 4>,
            {
                $vector::<T, 4, A>::new(self.x(), self.y(), self.z(), w)
            }
        }

        /// Axis directions: x is forward, y is east and z is up.
        impl<T: $bound + $crate::num::Signed, A: $crate::storage::SelectStorage<T, 3>>
            $vector<T, 3, A>
        {
            #[inline]
            pub fn forward() -> Self {
                Self::unit_x()
            }

            #[inline]
            pub fn backward() -> Self {
                Self::unit_x().negated()
            }

            #[inline]
            pub fn east() -> Self {
                Self::unit_y()
            }

            #[inline]
            pub fn west() -> Self {
                Self::unit_y().negated()
            }

            #[inline]
            pub fn up() -> Self {
                Self::unit_z()
            }

            #[inline]
            pub fn down() -> Self {
                Self::unit_z().negated()
            }
        }

        impl<T, A> $vector<T, 3, A>
        where
            T: $bound + $crate::num::Signed,
            A: $crate::storage::SelectStorage<T, 3>,
            A::Repr: $crate::dispatch::CrossPolicy<T>,
        {
            /// Computes the cross product of this vector with another.
            #[inline]
            pub fn cross(&self, other: &Self) -> Self {
                Self::wrap(<A::Repr as $crate::dispatch::CrossPolicy<T>>::map(
                    &self.components,
                    &other.components,
                ))
            }

            /// Replaces this vector with its cross product with another.
            #[inline]
            pub fn cross_assign(&mut self, other: &Self) -> &mut Self {
                <A::Repr as $crate::dispatch::CrossPolicy<T>>::map_assign(
                    &mut self.components,
                    &other.components,
                );
                self
            }
        }

        impl<T: $bound, A: $crate::storage::SelectStorage<T, 4>> $vector<T, 4, A> {
            /// Creates a new vector with the given components.
            #[inline]
            pub fn new(x: T, y: T, z: T, w: T) -> Self {
                Self::from_array([x, y, z, w])
            }

            #[inline]
            pub fn unit_x() -> Self {
                Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO)
            }

            #[inline]
            pub fn unit_y() -> Self {
                Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO)
            }

            #[inline]
            pub fn unit_z() -> Self {
                Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO)
            }

            #[inline]
            pub fn unit_w() -> Self {
                Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
            }

            #[inline]
            pub fn x(&self) -> T {
                self.component(0)
            }

            #[inline]
            pub fn y(&self) -> T {
                self.component(1)
            }

            #[inline]
            pub fn z(&self) -> T {
                self.component(2)
            }

            #[inline]
            pub fn w(&self) -> T {
                self.component(3)
            }

            #[inline]
            pub fn x_mut(&mut self) -> &mut T {
                &mut self.as_mut_slice()[0]
            }

            #[inline]
            pub fn y_mut(&mut self) -> &mut T {
                &mut self.as_mut_slice()[1]
            }

            #[inline]
            pub fn z_mut(&mut self) -> &mut T {
                &mut self.as_mut_slice()[2]
            }

            #[inline]
            pub fn w_mut(&mut self) -> &mut T {
                &mut self.as_mut_slice()[3]
            }

            #[inline]
            pub fn set_x(&mut self, x: T) {
                self.set_component(0, x);
            }

            #[inline]
            pub fn set_y(&mut self, y: T) {
                self.set_component(1, y);
            }

            #[inline]
            pub fn set_z(&mut self, z: T) {
                self.set_component(2, z);
            }

            #[inline]
            pub fn set_w(&mut self, w: T) {
                self.set_component(3, w);
            }

            /// Returns the 3D vector with the x-, y- and z-components.
            #[inline]
            pub fn xyz(&self) -> $vector<T, 3, A>
            where
                A: $crate::storage::SelectStorage<T, 3>,
            {
                $vector::<T, 3, A>::new(self.x(), self.y(), self.z())
            }
        }

        impl<T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>> Default
            for $vector<T, N, A>
        {
            #[inline]
            fn default() -> Self {
                Self::zeros()
            }
        }

        impl<T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>> PartialEq
            for $vector<T, N, A>
        {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>> ::std::fmt::Debug
            for $vector<T, N, A>
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}{}", stringify!($vector), N)?;
                let mut tuple = f.debug_tuple("");
                for component in self.as_slice() {
                    tuple.field(component);
                }
                tuple.finish()
            }
        }

        /// Formats the vector as `(x, y, z)`. Formatting flags are applied to
        /// each component.
        impl<T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>> ::std::fmt::Display
            for $vector<T, N, A>
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str("(")?;
                for (i, component) in self.as_slice().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    ::std::fmt::Display::fmt(component, f)?;
                }
                f.write_str(")")
            }
        }

        impl<T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>>
            ::std::ops::Index<usize> for $vector<T, N, A>
        {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                &self.as_slice()[index]
            }
        }

        impl<T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>>
            ::std::ops::IndexMut<usize> for $vector<T, N, A>
        {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.as_mut_slice()[index]
            }
        }

        impl<T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>> From<[T; N]>
            for $vector<T, N, A>
        {
            #[inline]
            fn from(components: [T; N]) -> Self {
                Self::from_array(components)
            }
        }

        impl<T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>>
            From<$vector<T, N, A>> for [T; N]
        {
            #[inline]
            fn from(vector: $vector<T, N, A>) -> Self {
                vector.to_array()
            }
        }

        unsafe impl<T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>>
            ::bytemuck::Zeroable for $vector<T, N, A>
        where
            A::Repr: ::bytemuck::Zeroable,
        {
        }

        // Length-3 vectors are only `Zeroable`, since an arbitrary bit pattern
        // could put a non-zero value in the padding lane.
        unsafe impl<T: $bound, A: $crate::storage::SelectStorage<T, 2>>
            ::bytemuck::Pod for $vector<T, 2, A>
        where
            A::Repr: ::bytemuck::Pod,
        {
        }

        unsafe impl<T: $bound, A: $crate::storage::SelectStorage<T, 4>>
            ::bytemuck::Pod for $vector<T, 4, A>
        where
            A::Repr: ::bytemuck::Pod,
        {
        }

        impl<T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>>
            $crate::tuple::ScalarTuple for $vector<T, N, A>
        {
            type Element = T;

            const LEN: usize = N;

            #[inline]
            fn as_slice(&self) -> &[T] {
                Self::as_slice(self)
            }

            #[inline]
            fn as_mut_slice(&mut self) -> &mut [T] {
                Self::as_mut_slice(self)
            }

            #[inline]
            fn dot(&self, other: &Self) -> T {
                Self::dot(self, other)
            }

            #[inline]
            fn component_min(&self, other: &Self) -> Self {
                Self::component_min(self, other)
            }

            #[inline]
            fn component_max(&self, other: &Self) -> Self {
                Self::component_max(self, other)
            }

            #[inline]
            fn equals(&self, other: &Self, threshold: T) -> bool {
                Self::equals(self, other, threshold)
            }
        }

        impl_binop!(
            Add, add, [T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, $vector<T, N, A>, $vector<T, N, A>,
            |a, b| {
                $vector::wrap(<A::Repr as $crate::dispatch::AddPolicy<T>>::map(
                    &a.components,
                    &b.components,
                ))
            }
        );

        impl_binop!(
            Sub, sub, [T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, $vector<T, N, A>, $vector<T, N, A>,
            |a, b| {
                $vector::wrap(<A::Repr as $crate::dispatch::SubPolicy<T>>::map(
                    &a.components,
                    &b.components,
                ))
            }
        );

        impl_binop!(
            Mul, mul, [T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, $vector<T, N, A>, $vector<T, N, A>,
            |a, b| { a.component_mul(b) }
        );

        impl_binop!(
            Div, div, [T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, $vector<T, N, A>, $vector<T, N, A>,
            |a, b| { a.component_div(b) }
        );

        impl_binop!(
            Mul, mul, [T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, T, $vector<T, N, A>,
            |a, b| {
                $vector::wrap(<A::Repr as $crate::dispatch::MulPolicy<T>>::map(
                    &a.components,
                    &$vector::<T, N, A>::padded_splat(*b, T::ZERO),
                ))
            }
        );

        impl_binop!(
            Div, div, [T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, T, $vector<T, N, A>,
            |a, b| {
                $vector::wrap(<A::Repr as $crate::dispatch::DivPolicy<T>>::map(
                    &a.components,
                    &$vector::<T, N, A>::padded_splat(*b, T::ONE),
                ))
            }
        );

        impl_binop_assign!(
            AddAssign, add_assign, [T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, $vector<T, N, A>,
            |a, b| {
                <A::Repr as $crate::dispatch::AddPolicy<T>>::map_assign(
                    &mut a.components,
                    &b.components,
                );
            }
        );

        impl_binop_assign!(
            SubAssign, sub_assign, [T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, $vector<T, N, A>,
            |a, b| {
                <A::Repr as $crate::dispatch::SubPolicy<T>>::map_assign(
                    &mut a.components,
                    &b.components,
                );
            }
        );

        impl_binop_assign!(
            MulAssign, mul_assign, [T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, $vector<T, N, A>,
            |a, b| {
                <A::Repr as $crate::dispatch::MulPolicy<T>>::map_assign(
                    &mut a.components,
                    &b.components,
                );
            }
        );

        impl_binop_assign!(
            DivAssign, div_assign, [T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, $vector<T, N, A>,
            |a, b| {
                <A::Repr as $crate::dispatch::DivPolicy<T>>::map_assign(
                    &mut a.components,
                    &b.divisor(),
                );
            }
        );

        impl_binop_assign!(
            MulAssign, mul_assign, [T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, T,
            |a, b| {
                <A::Repr as $crate::dispatch::MulPolicy<T>>::map_assign(
                    &mut a.components,
                    &$vector::<T, N, A>::padded_splat(*b, T::ZERO),
                );
            }
        );

        impl_binop_assign!(
            DivAssign, div_assign, [T: $bound, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, T,
            |a, b| {
                <A::Repr as $crate::dispatch::DivPolicy<T>>::map_assign(
                    &mut a.components,
                    &$vector::<T, N, A>::padded_splat(*b, T::ONE),
                );
            }
        );

        impl_unary_op!(
            Neg, neg,
            [T: $bound + $crate::num::Signed, const N: usize, A: $crate::storage::SelectStorage<T, N>],
            $vector<T, N, A>, $vector<T, N, A>,
            |a| { a.negated() }
        );
    };
}
